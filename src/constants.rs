pub const DELIMITER: char = ',';
pub const ABSENT_TOKEN: &str = "#";
