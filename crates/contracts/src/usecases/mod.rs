pub mod report_aggregation;
pub mod room_usage;
