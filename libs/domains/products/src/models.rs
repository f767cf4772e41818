use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Product category (fixed set, SCREAMING case on the wire)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "categoria")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[sea_orm(string_value = "ELECTRONICA")]
    Electronica,
    #[sea_orm(string_value = "ROPA")]
    Ropa,
    #[sea_orm(string_value = "HOGAR")]
    Hogar,
    #[sea_orm(string_value = "DEPORTES")]
    Deportes,
    #[sea_orm(string_value = "LIBROS")]
    Libros,
    #[sea_orm(string_value = "OTROS")]
    Otros,
}

// `DeriveActiveEnum` already emits `TryFrom<&str>` with the same wire
// strings strum's `EnumString` would accept, and the two derives cannot
// coexist (conflicting `TryFrom<&str>` impls); delegate `FromStr` to it
// so `str::parse` keeps working.
impl std::str::FromStr for Category {
    type Err = sea_orm::DbErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Product entity - an item in the catalog
///
/// Field names are English in Rust; serde renames map them to the Spanish
/// wire format (`nombre`, `descripcion`, `precio`, `stock`, `categoria`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Unit price
    #[serde(rename = "precio")]
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Category the product belongs to
    #[serde(rename = "categoria")]
    pub category: Category,
}

/// DTO for creating or fully replacing a product
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i32,
    #[serde(rename = "categoria")]
    pub category: Category,
}

// Validation errors are keyed by the wire field names so the `errores`
// object in 400 responses matches the JSON payload, which the derive
// cannot express.
impl Validate for ProductInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add(
                "nombre",
                ValidationError::new("required").with_message("El nombre es obligatorio".into()),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// DTO for the stock patch endpoint
///
/// This is the only write path that rejects negative stock; create and
/// replace accept any integer, mirroring the external contract.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StockUpdate {
    /// `None` when the body omits `stock` or sends it as null; validation
    /// rejects that case with its own message instead of a serde error.
    pub stock: Option<i32>,
}

impl Validate for StockUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self.stock {
            None => errors.add(
                "stock",
                ValidationError::new("required")
                    .with_message("El stock no puede ser nulo".into()),
            ),
            Some(stock) if stock < 0 => errors.add(
                "stock",
                ValidationError::new("range")
                    .with_message("El stock no puede ser negativo".into()),
            ),
            Some(_) => {}
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Product {
    /// Create a new product from the input DTO with a fresh id
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
        }
    }

    /// Replace every mutable field from the input DTO (PUT semantics)
    pub fn apply_input(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.stock = input.stock;
        self.category = input.category;
    }
}
