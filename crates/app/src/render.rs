//! Table rendering for the terminal.

use itemdesk_application::ItemsState;
use itemdesk_domain::{Item, display_timestamp};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Create Date")]
    created: String,
    #[tabled(rename = "Update Date")]
    updated: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.value(),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            created: display_timestamp(&item.created_at),
            updated: display_timestamp(&item.updated_at),
        }
    }
}

/// Renders items as a table.
pub fn items_table(items: &[Item]) -> String {
    Table::new(items.iter().map(ItemRow::from)).to_string()
}

/// Renders what the item list view shows for `state`.
pub fn list_view(state: &ItemsState) -> String {
    if state.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error {
        return error.clone();
    }
    if state.items.is_empty() {
        return "No items.".to_string();
    }
    items_table(&state.items)
}

/// Renders the details of a single item.
pub fn item_details(item: &Item) -> String {
    format!(
        "ID:          {}\nName:        {}\nDescription: {}\nPrice:       {}\nCreated:     {}\nUpdated:     {}",
        item.id,
        item.name,
        item.description.as_deref().unwrap_or(""),
        item.price,
        display_timestamp(&item.created_at),
        display_timestamp(&item.updated_at),
    )
}
