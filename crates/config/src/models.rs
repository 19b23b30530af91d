use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

/// Client configuration for both backends, built once at `init`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub image: ImageServiceConfig,
    pub bucket: BucketServiceConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageServiceConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_base: String,
    pub max_width: u32,
}

impl Default for ImageServiceConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            api_base: super::defaults::cloudinary_api_base(),
            max_width: super::defaults::max_width(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketServiceConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<S3Region>,
    pub bucket: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Regions offered in the `s3_region` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Region {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    CaCentral1,
    ApSouth1,
    ApNortheast1,
    ApNortheast2,
    ApNortheast3,
    ApSoutheast1,
    ApSoutheast2,
    CnNorth1,
    CnNorthwest1,
    EuCentral1,
    EuNorth1,
    EuWest1,
    EuWest2,
    EuWest3,
    SaEast1,
}

impl S3Region {
    pub const ALL: [S3Region; 19] = [
        S3Region::UsEast1,
        S3Region::UsEast2,
        S3Region::UsWest1,
        S3Region::UsWest2,
        S3Region::CaCentral1,
        S3Region::ApSouth1,
        S3Region::ApNortheast1,
        S3Region::ApNortheast2,
        S3Region::ApNortheast3,
        S3Region::ApSoutheast1,
        S3Region::ApSoutheast2,
        S3Region::CnNorth1,
        S3Region::CnNorthwest1,
        S3Region::EuCentral1,
        S3Region::EuNorth1,
        S3Region::EuWest1,
        S3Region::EuWest2,
        S3Region::EuWest3,
        S3Region::SaEast1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            S3Region::UsEast1 => "us-east-1",
            S3Region::UsEast2 => "us-east-2",
            S3Region::UsWest1 => "us-west-1",
            S3Region::UsWest2 => "us-west-2",
            S3Region::CaCentral1 => "ca-central-1",
            S3Region::ApSouth1 => "ap-south-1",
            S3Region::ApNortheast1 => "ap-northeast-1",
            S3Region::ApNortheast2 => "ap-northeast-2",
            S3Region::ApNortheast3 => "ap-northeast-3",
            S3Region::ApSoutheast1 => "ap-southeast-1",
            S3Region::ApSoutheast2 => "ap-southeast-2",
            S3Region::CnNorth1 => "cn-north-1",
            S3Region::CnNorthwest1 => "cn-northwest-1",
            S3Region::EuCentral1 => "eu-central-1",
            S3Region::EuNorth1 => "eu-north-1",
            S3Region::EuWest1 => "eu-west-1",
            S3Region::EuWest2 => "eu-west-2",
            S3Region::EuWest3 => "eu-west-3",
            S3Region::SaEast1 => "sa-east-1",
        }
    }

    /// China regions live under a separate DNS suffix
    pub fn is_china(&self) -> bool {
        matches!(self, S3Region::CnNorth1 | S3Region::CnNorthwest1)
    }
}

impl fmt::Display for S3Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        S3Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidRegion(s.to_string()))
    }
}
