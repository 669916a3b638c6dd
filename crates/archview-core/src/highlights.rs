//! Architecture highlight cards shown beneath the diagram.

use crate::diagram::{Glyph, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "High Security",
        body: "Multi-layered security with WAF, security groups, and private subnets",
        glyph: Glyph::Shield,
        tone: Tone::Green,
    },
    Highlight {
        title: "High Availability",
        body: "Multi-AZ deployment with automatic failover capabilities",
        glyph: Glyph::Refresh,
        tone: Tone::Blue,
    },
    Highlight {
        title: "Auto Scaling",
        body: "Automatically scales based on demand to optimize costs",
        glyph: Glyph::Zap,
        tone: Tone::Purple,
    },
];
