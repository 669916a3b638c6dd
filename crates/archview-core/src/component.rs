//! Identifiers for the services shown in the architecture diagram.

use std::fmt;

/// A service in the reference architecture.
///
/// Several diagram regions may share one id (both EC2 nodes are `Ec2`,
/// RDS Primary and Standby are both `Rds`): every instance of a service
/// shares a single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentId {
    Route53,
    CloudFront,
    Waf,
    Vpc,
    Alb,
    Ec2,
    Rds,
    ElastiCache,
    S3,
    CloudWatch,
}

impl ComponentId {
    /// Every known id, in diagram order (top to bottom).
    pub const ALL: [ComponentId; 10] = [
        ComponentId::Route53,
        ComponentId::CloudFront,
        ComponentId::Waf,
        ComponentId::Vpc,
        ComponentId::Alb,
        ComponentId::Ec2,
        ComponentId::Rds,
        ComponentId::ElastiCache,
        ComponentId::S3,
        ComponentId::CloudWatch,
    ];

    /// Stable lowercase key, used in logs.
    pub fn key(self) -> &'static str {
        match self {
            ComponentId::Route53 => "route53",
            ComponentId::CloudFront => "cloudfront",
            ComponentId::Waf => "waf",
            ComponentId::Vpc => "vpc",
            ComponentId::Alb => "alb",
            ComponentId::Ec2 => "ec2",
            ComponentId::Rds => "rds",
            ComponentId::ElastiCache => "elasticache",
            ComponentId::S3 => "s3",
            ComponentId::CloudWatch => "cloudwatch",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = ComponentId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), ComponentId::ALL.len());
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        let ids: HashSet<_> = ComponentId::ALL.iter().collect();
        assert_eq!(ids.len(), ComponentId::ALL.len());
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(ComponentId::ElastiCache.to_string(), "elasticache");
    }
}
