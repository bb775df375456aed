mod table_error;
mod travel_time_table;

pub use table_error::TableError;
pub use travel_time_table::{TravelTimeTable, DESTINATION_COLUMN, ORIGIN_COLUMN, VALUE_OFFSET};
