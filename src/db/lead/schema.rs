pub const FIELD_TABLE_NAME: &str = "lead_field";
pub const LIST_TABLE_NAME: &str = "lead_list_entry";

pub enum FieldColumns {
    Key,
    Field,
    Value,
}

impl FieldColumns {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldColumns::Key => "key",
            FieldColumns::Field => "field",
            FieldColumns::Value => "value",
        }
    }
}

pub enum ListColumns {
    Id,
    List,
    Key,
}

impl ListColumns {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListColumns::Id => "id",
            ListColumns::List => "list",
            ListColumns::Key => "key",
        }
    }
}
