pub const PROGRESS_BAR_WIDTH: usize = 20;
pub const BAR_FILLED: char = '#';
pub const BAR_EMPTY: char = '-';
pub const RULE_WIDTH: usize = 72;
pub const EMPTY_HINT: &str = "Enter equipment details above to start scraping for properties";
pub const NO_PROPERTIES_HINT: &str = "No properties found yet. Scraping in progress...";
pub const MISSING_HINT: &str = "Property not found - select to search again";
