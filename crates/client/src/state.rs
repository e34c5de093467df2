use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use models::product::{Model as Product, ProductInput};

/// Direction for the local store-code sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// In-progress form, kept as the raw strings a user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub product_code: String,
    pub product_name: String,
    pub product_date: String,
    pub product_origin_price: String,
    pub quantity: String,
    pub product_store_code: String,
}

impl ProductForm {
    /// Pre-fill a form from a fetched record (edit flow). Dates render as
    /// `YYYY-MM-DD` to match a date input.
    pub fn from_record(record: &Product) -> Self {
        Self {
            product_code: record.product_code.clone(),
            product_name: record.product_name.clone(),
            product_date: record.product_date.date_naive().format("%Y-%m-%d").to_string(),
            product_origin_price: record.product_origin_price.to_string(),
            quantity: record.quantity.to_string(),
            product_store_code: record.product_store_code.clone(),
        }
    }

    /// Submission guard for the create flow: the price must parse as a
    /// finite number strictly greater than zero.
    pub fn has_valid_price(&self) -> bool {
        self.product_origin_price
            .trim()
            .parse::<f64>()
            .map(|p| p.is_finite() && p > 0.0)
            .unwrap_or(false)
    }

    /// Turn the raw form into a typed request payload.
    pub fn parse(&self) -> Result<ProductInput, String> {
        let product_date = parse_form_date(&self.product_date)?;
        let product_origin_price = self
            .product_origin_price
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid origin price: {}", self.product_origin_price))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid quantity: {}", self.quantity))?;
        Ok(ProductInput {
            product_code: self.product_code.clone(),
            product_name: self.product_name.clone(),
            product_date,
            product_origin_price,
            quantity,
            product_store_code: self.product_store_code.clone(),
        })
    }
}

fn parse_form_date(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|_| format!("invalid date: {raw}"))
}

/// A record selected for editing. Can only be built from a fetched record,
/// so it always carries the record's id.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub id: Uuid,
    pub form: ProductForm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// One immutable snapshot of everything the product list view needs.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Mirror of the server list; authoritative only right after a fetch.
    pub products: Vec<Product>,
    /// At most one record selected for edit; `None` means create mode.
    pub editing: Option<EditDraft>,
    /// The in-progress create form.
    pub draft: ProductForm,
    pub sort: SortDirection,
    /// Transient notification; errors are cleared by the next successful fetch.
    pub notice: Option<Notice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// First render; triggers the initial fetch.
    Started,
    ProductsLoaded(Vec<Product>),
    LoadFailed,
    DraftChanged(ProductForm),
    SubmitCreate,
    EditRequested(Product),
    EditChanged(ProductForm),
    CancelEdit,
    SubmitEdit,
    DeleteRequested(Uuid),
    SortChanged(SortDirection),
    MutationSucceeded(Mutation),
    MutationFailed(Mutation),
}

/// Requests the state model asks the outside world to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchProducts,
    Create(ProductInput),
    Update(Uuid, ProductInput),
    Delete(Uuid),
}

/// The whole update cycle: action in, new state plus effects out.
pub fn update(state: AppState, action: Action) -> (AppState, Vec<Effect>) {
    let mut next = state;
    let mut effects = Vec::new();

    match action {
        Action::Started => effects.push(Effect::FetchProducts),
        Action::ProductsLoaded(products) => {
            // Wholesale replacement: server order wins and any local sort
            // is discarded until the user reapplies it.
            next.products = products;
            if matches!(next.notice, Some(Notice::Error(_))) {
                next.notice = None;
            }
        }
        Action::LoadFailed => {
            next.notice = Some(Notice::Error("Failed to load products!".into()));
        }
        Action::DraftChanged(form) => next.draft = form,
        Action::SubmitCreate => {
            if !next.draft.has_valid_price() {
                // Rejected locally; the server is never contacted.
                next.notice = Some(Notice::Error("Please enter a valid origin price".into()));
            } else {
                match next.draft.parse() {
                    Ok(input) => effects.push(Effect::Create(input)),
                    Err(reason) => next.notice = Some(Notice::Error(reason)),
                }
            }
        }
        Action::EditRequested(record) => {
            next.editing = Some(EditDraft { id: record.id, form: ProductForm::from_record(&record) });
        }
        Action::EditChanged(form) => {
            if let Some(editing) = next.editing.as_mut() {
                editing.form = form;
            }
        }
        Action::CancelEdit => next.editing = None,
        Action::SubmitEdit => {
            if let Some(editing) = next.editing.clone() {
                match editing.form.parse() {
                    Ok(input) => effects.push(Effect::Update(editing.id, input)),
                    Err(reason) => next.notice = Some(Notice::Error(reason)),
                }
            }
        }
        Action::DeleteRequested(id) => effects.push(Effect::Delete(id)),
        Action::SortChanged(direction) => {
            next.sort = direction;
            sort_by_store_code(&mut next.products, direction);
        }
        Action::MutationSucceeded(mutation) => {
            match mutation {
                Mutation::Create => {
                    next.draft = ProductForm::default();
                    next.notice = Some(Notice::Success("Product added successfully!".into()));
                }
                Mutation::Update => {
                    next.editing = None;
                    next.notice = Some(Notice::Success("Product updated successfully!".into()));
                }
                Mutation::Delete => {
                    next.notice = Some(Notice::Success("Product deleted successfully!".into()));
                }
            }
            // Mutation results are never merged locally; refetch instead.
            effects.push(Effect::FetchProducts);
        }
        Action::MutationFailed(mutation) => {
            let message = match mutation {
                Mutation::Create => "Failed to add product!",
                Mutation::Update => "Failed to update product!",
                Mutation::Delete => "Failed to delete product!",
            };
            next.notice = Some(Notice::Error(message.into()));
        }
    }

    (next, effects)
}

/// Lexicographic re-order of the currently loaded list by store code.
pub fn sort_by_store_code(products: &mut [Product], direction: SortDirection) {
    products.sort_by(|a, b| match direction {
        SortDirection::Ascending => a.product_store_code.cmp(&b.product_store_code),
        SortDirection::Descending => b.product_store_code.cmp(&a.product_store_code),
    });
}
