use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::tier_config;
use crate::error::MembershipError;
use crate::tier::Tier;

/// Off-chain token metadata document (Metaplex JSON layout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<MetadataAttribute>,
    pub properties: MetadataProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MetadataAttribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MetadataProperties {
    pub category: String,
    pub files: Vec<MetadataFile>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MetadataFile {
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Placeholder artwork until real hosted images replace the catalog URLs.
fn placeholder_image(tier: Tier) -> &'static str {
    match tier {
        Tier::Bronze => "https://images.unsplash.com/photo-1472396961693-142e6e269027?w=400&h=400&fit=crop",
        Tier::Silver => "https://images.unsplash.com/photo-1433086966358-54859d0ed716?w=400&h=400&fit=crop",
        Tier::Gold => "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?w=400&h=400&fit=crop",
    }
}

fn attribute(trait_type: &str, value: &str) -> MetadataAttribute {
    MetadataAttribute {
        trait_type: trait_type.to_string(),
        value: value.to_string(),
    }
}

impl TokenMetadata {
    /// Build the full metadata document for a tier from the catalog.
    pub fn for_tier(tier: Tier) -> Self {
        let config = tier_config(tier);
        let image = placeholder_image(tier);

        TokenMetadata {
            name: config.name.to_string(),
            symbol: config.symbol.to_string(),
            description: config.description.to_string(),
            image: image.to_string(),
            attributes: vec![
                attribute("Tier", tier.name()),
                attribute("Program", "SolBrew Loyalty"),
                attribute("Utility", "Coffee Membership"),
                attribute("Discount", &format!("{}%", config.discount_bps / 100)),
                attribute(
                    "Priority Access",
                    if tier >= Tier::Silver { "Yes" } else { "No" },
                ),
                attribute("VIP Perks", if tier == Tier::Gold { "Yes" } else { "No" }),
            ],
            properties: MetadataProperties {
                category: "image".to_string(),
                files: vec![MetadataFile {
                    uri: image.to_string(),
                    kind: "image/png".to_string(),
                }],
            },
            external_url: Some("https://solbrew.coffee".to_string()),
            animation_url: None,
        }
    }

    /// Validate required fields before upload.
    pub fn validate(&self) -> Result<(), MembershipError> {
        fn required(field: &'static str, value: &str) -> Result<(), MembershipError> {
            if value.is_empty() {
                return Err(MembershipError::MissingMetadataField { field });
            }
            Ok(())
        }

        required("name", &self.name)?;
        required("symbol", &self.symbol)?;
        required("description", &self.description)?;
        required("image", &self.image)?;
        if self.attributes.is_empty() {
            return Err(MembershipError::MissingMetadataField {
                field: "attributes",
            });
        }
        if self.properties.files.is_empty() {
            return Err(MembershipError::MissingMetadataField {
                field: "properties.files",
            });
        }
        Ok(())
    }
}
