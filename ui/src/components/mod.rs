pub mod schema_row;
pub mod toast;
pub mod view_audience;
