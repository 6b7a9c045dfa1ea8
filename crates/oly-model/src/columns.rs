//! Column names used across the source tables.

pub const ATHLETE_ID: &str = "athlete_id";
pub const BORN: &str = "born";

pub const EDITION: &str = "edition";
pub const EDITION_ID: &str = "edition_id";
pub const YEAR: &str = "year";
pub const COMPETITION_DATE: &str = "competition_date";

pub const COUNTRY_NOC: &str = "country_noc";
pub const MEDAL: &str = "medal";
pub const AGE: &str = "age";

pub const NOC: &str = "noc";
pub const COUNTRY: &str = "country";
