pub const WILDCARD_TOKEN: &str = "*";
pub const LIST_SEPARATOR: char = ',';
pub const MAPPING_SEPARATOR: char = '=';
pub const TRUE_LITERALS: [&str; 3] = ["true", "True", "TRUE"];
pub const FALSE_LITERALS: [&str; 3] = ["false", "False", "FALSE"];
