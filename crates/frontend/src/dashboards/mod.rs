pub mod d100_booking_report;
pub mod d101_room_usage;
