const REGION_VAR: &str = "AWS_REGION";
const TABLE_VAR: &str = "PRODUCTS_TABLE_NAME";

/// Startup configuration read from the function environment.
///
/// Nothing here is validated. An empty region or a missing table name is
/// carried as-is and shows up later as an init or scan failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub table_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            region: lookup(REGION_VAR).unwrap_or_default(),
            table_name: lookup(TABLE_VAR).filter(|name| !name.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_region_and_table() {
        let config = Config::from_lookup(lookup_in(&[
            ("AWS_REGION", "eu-west-1"),
            ("PRODUCTS_TABLE_NAME", "products"),
        ]));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.table_name.as_deref(), Some("products"));
    }

    #[test]
    fn missing_vars_degrade_instead_of_failing() {
        let config = Config::from_lookup(lookup_in(&[]));
        assert_eq!(config, Config::default());
        assert!(config.region.is_empty());
        assert!(config.table_name.is_none());
    }

    #[test]
    fn empty_table_name_is_unset() {
        let config = Config::from_lookup(lookup_in(&[("PRODUCTS_TABLE_NAME", "")]));
        assert!(config.table_name.is_none());
    }
}
