//! Service catalog: descriptive content for every diagram node.
//!
//! [`describe`] is total over [`ComponentId`]; adding a variant without an
//! entry is a compile error. [`validate_catalog`] additionally checks at
//! startup that no entry was left with blank content.

use crate::component::ComponentId;
use crate::error::{Error, Result};

/// Descriptive record shown in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRecord {
    pub name: &'static str,
    pub description: &'static str,
    /// Shown in order, without sorting or de-duplication.
    pub benefits: &'static [&'static str],
}

const ROUTE53: ComponentRecord = ComponentRecord {
    name: "Amazon Route 53",
    description: "Highly available DNS service with health checks and routing policies.",
    benefits: &[
        "DNS management",
        "Health checks",
        "Traffic routing",
        "Domain registration",
    ],
};

const CLOUDFRONT: ComponentRecord = ComponentRecord {
    name: "Amazon CloudFront",
    description: "CDN for content delivery with edge locations worldwide. Reduces latency and improves performance.",
    benefits: &[
        "Global content delivery",
        "DDoS protection",
        "SSL/TLS termination",
        "Caching at edge",
    ],
};

const WAF: ComponentRecord = ComponentRecord {
    name: "AWS WAF",
    description: "Web Application Firewall to protect against common web exploits and bots.",
    benefits: &[
        "SQL injection protection",
        "XSS prevention",
        "Rate limiting",
        "Custom security rules",
    ],
};

const VPC: ComponentRecord = ComponentRecord {
    name: "Amazon VPC",
    description: "Isolated virtual network with public and private subnets across multiple AZs.",
    benefits: &[
        "Network isolation",
        "Security groups",
        "NACLs",
        "VPC peering",
    ],
};

const ALB: ComponentRecord = ComponentRecord {
    name: "Application Load Balancer",
    description: "Layer 7 load balancer that distributes traffic across multiple targets in multiple AZs.",
    benefits: &[
        "Path-based routing",
        "SSL termination",
        "Health checks",
        "Auto scaling integration",
    ],
};

const EC2: ComponentRecord = ComponentRecord {
    name: "Amazon EC2 Auto Scaling",
    description: "Compute instances in Auto Scaling groups across multiple availability zones.",
    benefits: &[
        "Automatic scaling",
        "High availability",
        "Cost optimization",
        "Multiple instance types",
    ],
};

const RDS: ComponentRecord = ComponentRecord {
    name: "Amazon RDS Multi-AZ",
    description: "Managed relational database with automatic failover and backups.",
    benefits: &[
        "Automated backups",
        "Multi-AZ deployment",
        "Read replicas",
        "Automatic patching",
    ],
};

const ELASTICACHE: ComponentRecord = ComponentRecord {
    name: "Amazon ElastiCache",
    description: "In-memory caching service for improved application performance.",
    benefits: &[
        "Sub-millisecond latency",
        "Redis/Memcached",
        "Automatic failover",
        "Cluster mode",
    ],
};

const S3: ComponentRecord = ComponentRecord {
    name: "Amazon S3",
    description: "Object storage for static assets, backups, and data lakes.",
    benefits: &[
        "99.999999999% durability",
        "Versioning",
        "Lifecycle policies",
        "Cross-region replication",
    ],
};

const CLOUDWATCH: ComponentRecord = ComponentRecord {
    name: "Amazon CloudWatch",
    description: "Monitoring and observability service for logs, metrics, and alarms.",
    benefits: &[
        "Real-time monitoring",
        "Custom metrics",
        "Automated actions",
        "Log aggregation",
    ],
};

/// Look up the record for a component.
pub fn describe(id: ComponentId) -> &'static ComponentRecord {
    match id {
        ComponentId::Route53 => &ROUTE53,
        ComponentId::CloudFront => &CLOUDFRONT,
        ComponentId::Waf => &WAF,
        ComponentId::Vpc => &VPC,
        ComponentId::Alb => &ALB,
        ComponentId::Ec2 => &EC2,
        ComponentId::Rds => &RDS,
        ComponentId::ElastiCache => &ELASTICACHE,
        ComponentId::S3 => &S3,
        ComponentId::CloudWatch => &CLOUDWATCH,
    }
}

/// Check every catalog entry has a name, a description and at least one
/// benefit. Run once before the UI starts.
pub fn validate_catalog() -> Result<()> {
    for id in ComponentId::ALL {
        validate_record(id.key(), describe(id))?;
    }
    tracing::debug!("Service catalog validated ({} entries)", ComponentId::ALL.len());
    Ok(())
}

fn validate_record(key: &'static str, record: &ComponentRecord) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(Error::catalog(key, "name is empty"));
    }
    if record.description.trim().is_empty() {
        return Err(Error::catalog(key, "description is empty"));
    }
    if record.benefits.is_empty() {
        return Err(Error::catalog(key, "benefits list is empty"));
    }
    if let Some(pos) = record.benefits.iter().position(|b| b.trim().is_empty()) {
        return Err(Error::catalog(key, format!("benefit #{} is blank", pos + 1)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_catalog_is_valid() {
        validate_catalog().unwrap();
    }

    #[test]
    fn test_every_id_has_complete_record() {
        for id in ComponentId::ALL {
            let record = describe(id);
            assert!(!record.name.is_empty(), "{id} has no name");
            assert!(!record.description.is_empty(), "{id} has no description");
            assert!(!record.benefits.is_empty(), "{id} has no benefits");
        }
    }

    #[test]
    fn test_record_names_are_distinct() {
        let mut names: Vec<_> = ComponentId::ALL.iter().map(|id| describe(*id).name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ComponentId::ALL.len());
    }

    #[test]
    fn test_benefit_order_is_preserved() {
        assert_eq!(
            describe(ComponentId::S3).benefits,
            &[
                "99.999999999% durability",
                "Versioning",
                "Lifecycle policies",
                "Cross-region replication",
            ]
        );
    }

    #[test]
    fn test_describe_alb() {
        let record = describe(ComponentId::Alb);
        assert_eq!(record.name, "Application Load Balancer");
        assert!(record.description.starts_with("Layer 7 load balancer"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let record = ComponentRecord {
            name: "  ",
            description: "desc",
            benefits: &["one"],
        };
        let err = validate_record("test", &record).unwrap_err();
        assert!(err.to_string().contains("name is empty"));
    }

    #[test]
    fn test_validate_rejects_missing_benefits() {
        let record = ComponentRecord {
            name: "Name",
            description: "desc",
            benefits: &[],
        };
        let err = validate_record("test", &record).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("benefits list is empty"));
    }

    #[test]
    fn test_validate_rejects_blank_benefit() {
        let record = ComponentRecord {
            name: "Name",
            description: "desc",
            benefits: &["ok", ""],
        };
        let err = validate_record("test", &record).unwrap_err();
        assert!(err.to_string().contains("benefit #2 is blank"));
    }
}
