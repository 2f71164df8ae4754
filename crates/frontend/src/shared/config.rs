use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    pub brand: String,
    pub currency_symbol: String,
    /// Port the storefront API listens on, host is taken from the page location
    pub api_port: u16,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub featured: Vec<FeaturedProduct>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FeaturedProduct {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "ShopElite".to_string(),
            currency_symbol: "$".to_string(),
            api_port: 3000,
            nav: vec![NavLink {
                label: "Home".to_string(),
                target: "/".to_string(),
            }],
            featured: vec![],
        }
    }
}

/// Default configuration embedded in the bundle
// Every nav entry points at the root until the catalogue routes exist.
const DEFAULT_CONFIG: &str = r#"
brand = "ShopElite"
currency_symbol = "$"
api_port = 3000

[[nav]]
label = "Home"
target = "/"

[[nav]]
label = "Shop"
target = "/"

[[nav]]
label = "Categories"
target = "/"

[[nav]]
label = "About"
target = "/"

[[featured]]
id = "classic-watch"
name = "Classic Leather Watch"
image_url = "/assets/products/classic-watch.jpg"
price = 129.99

[[featured]]
id = "canvas-tote"
name = "Canvas Tote Bag"
image_url = "/assets/products/canvas-tote.jpg"
price = 34.5

[[featured]]
id = "wireless-earbuds"
name = "Wireless Earbuds"
image_url = "/assets/products/wireless-earbuds.jpg"
price = 79.0
"#;

static CONFIG: Lazy<StorefrontConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Failed to parse storefront config, using defaults: {}", e);
        StorefrontConfig::default()
    }
});

pub fn load_config() -> Result<StorefrontConfig, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

/// Storefront configuration, parsed once on first access
pub fn config() -> &'static StorefrontConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.brand, "ShopElite");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.featured.len(), 3);
    }

    #[test]
    fn test_nav_links_keep_order_and_target_root() {
        let config = load_config().unwrap();
        let labels: Vec<&str> = config.nav.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Shop", "Categories", "About"]);
        assert!(config.nav.iter().all(|l| l.target == "/"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: StorefrontConfig =
            toml::from_str("brand = \"X\"\ncurrency_symbol = \"€\"\napi_port = 8080\n").unwrap();
        assert!(config.nav.is_empty());
        assert!(config.featured.is_empty());
    }
}
