use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub process: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub state: String,
}

/// Body of `PUT /apps/:app` when changing tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierUpdateRequest<'a> {
    pub app: TierUpdateBody<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierUpdateBody<'a> {
    pub tier: &'a str,
}

impl<'a> TierUpdateRequest<'a> {
    pub fn new(tier: &'a str) -> Self {
        Self {
            app: TierUpdateBody { tier },
        }
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../../tests/providers/heroku/heroku_dtos.rs"]
mod tests;
