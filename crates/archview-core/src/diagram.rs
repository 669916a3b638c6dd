//! The architecture diagram as a tree of regions.
//!
//! Regions live in an arena ([`Diagram`]) and refer to each other by
//! [`RegionId`]. The tree carries no geometry: the view layer lays regions out
//! from their [`RegionKind`] and records where each one landed.
//!
//! ## Click bindings
//!
//! A region may carry a [`ClickBinding`]. Clicks bubble from the innermost
//! region towards the root, and every binding on the way fires until one with
//! `stop_propagation` is reached. A clickable region nested inside another
//! clickable region must stop propagation, otherwise the ancestor's binding
//! would fire after it and win. [`Diagram::validate`] enforces this.

use crate::component::ComponentId;
use crate::error::{Error, Result};

/// Index of a region inside its [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(usize);

impl RegionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a region is drawn and how it arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Single-row pill marking where traffic comes from
    Source,
    /// Horizontal row of sibling nodes, no frame of its own
    Tier,
    /// Network boundary; framed, children stacked vertically
    Boundary,
    /// Equal-width columns, one per zone
    ZoneGrid,
    /// Availability zone; framed, children stacked vertically
    Zone,
    /// Subnet inside a zone; framed, children stacked vertically
    Subnet,
    /// Standalone service card (icon + label, caption)
    Service,
    /// Compact single-row node inside a subnet
    Instance,
}

impl RegionKind {
    /// Whether regions of this kind hold other regions.
    pub fn is_container(self) -> bool {
        !matches!(self, RegionKind::Source | RegionKind::Service | RegionKind::Instance)
    }
}

/// Decorative glyph paired with a region. Resolved to a concrete character
/// by the view's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Globe,
    Shield,
    Lock,
    Server,
    Database,
    Zap,
    HardDrive,
    Refresh,
    Activity,
    Cloud,
}

/// Accent colour family for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Orange,
    Purple,
    Red,
    Blue,
    Cyan,
    Amber,
    Indigo,
    Pink,
    Emerald,
    Yellow,
    Slate,
}

/// What a click on a region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickBinding {
    pub target: ComponentId,
    pub stop_propagation: bool,
}

impl ClickBinding {
    /// Binding for a top-level node; lets the click continue to ancestors.
    pub fn select(target: ComponentId) -> Self {
        Self {
            target,
            stop_propagation: false,
        }
    }

    /// Binding for a nested node; the click ends here.
    pub fn select_and_stop(target: ComponentId) -> Self {
        Self {
            target,
            stop_propagation: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    pub id: RegionId,
    pub parent: Option<RegionId>,
    pub kind: RegionKind,
    pub label: &'static str,
    pub caption: Option<&'static str>,
    pub glyph: Option<Glyph>,
    pub tone: Tone,
    pub binding: Option<ClickBinding>,
    children: Vec<RegionId>,
}

impl Region {
    pub fn is_clickable(&self) -> bool {
        self.binding.is_some()
    }
}

/// Static description of a region, used while building a [`Diagram`].
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub kind: RegionKind,
    pub label: &'static str,
    pub caption: Option<&'static str>,
    pub glyph: Option<Glyph>,
    pub tone: Tone,
    pub binding: Option<ClickBinding>,
}

impl RegionSpec {
    pub fn new(kind: RegionKind, label: &'static str, tone: Tone) -> Self {
        Self {
            kind,
            label,
            caption: None,
            glyph: None,
            tone,
            binding: None,
        }
    }

    pub fn caption(mut self, caption: &'static str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn on_click(mut self, binding: ClickBinding) -> Self {
        self.binding = Some(binding);
        self
    }
}

/// Arena of regions forming the diagram tree.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub title: &'static str,
    pub subtitle: &'static str,
    regions: Vec<Region>,
    roots: Vec<RegionId>,
}

impl Diagram {
    pub fn new(title: &'static str, subtitle: &'static str) -> Self {
        Self {
            title,
            subtitle,
            regions: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Append a region under `parent` (or as a new root) and return its id.
    ///
    /// # Panics
    /// If `parent` does not belong to this diagram.
    pub fn push(&mut self, parent: Option<RegionId>, spec: RegionSpec) -> RegionId {
        let id = RegionId(self.regions.len());
        match parent {
            Some(p) => self.regions[p.0].children.push(id),
            None => self.roots.push(id),
        }
        self.regions.push(Region {
            id,
            parent,
            kind: spec.kind,
            label: spec.label,
            caption: spec.caption,
            glyph: spec.glyph,
            tone: spec.tone,
            binding: spec.binding,
            children: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn roots(&self) -> &[RegionId] {
        &self.roots
    }

    pub fn children(&self, id: RegionId) -> &[RegionId] {
        self.get(id).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    /// The region itself followed by each ancestor up to its root.
    pub fn ancestors(&self, id: RegionId) -> impl Iterator<Item = &Region> + '_ {
        std::iter::successors(self.get(id), move |r| r.parent.and_then(|p| self.get(p)))
    }

    /// Nesting depth; roots are at depth 0.
    pub fn depth(&self, id: RegionId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// All regions in document order (pre-order, top to bottom, left to right).
    pub fn iter(&self) -> impl Iterator<Item = &Region> + '_ {
        let mut stack: Vec<RegionId> = self.roots.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let region = &self.regions[id.0];
            stack.extend(region.children.iter().rev().copied());
            Some(region)
        })
    }

    /// Clickable regions in document order.
    pub fn clickable(&self) -> Vec<RegionId> {
        self.iter()
            .filter(|r| r.is_clickable())
            .map(|r| r.id)
            .collect()
    }

    /// Distinct component ids reachable from a click, in first-seen order.
    pub fn bound_components(&self) -> Vec<ComponentId> {
        let mut seen = Vec::new();
        for binding in self.iter().filter_map(|r| r.binding) {
            if !seen.contains(&binding.target) {
                seen.push(binding.target);
            }
        }
        seen
    }

    /// Check structural rules the view and the click dispatcher rely on.
    pub fn validate(&self) -> Result<()> {
        for region in &self.regions {
            if !region.kind.is_container() && !region.children.is_empty() {
                return Err(Error::diagram(format!(
                    "'{}' is a {:?} and cannot hold children",
                    region.label, region.kind
                )));
            }

            let Some(binding) = region.binding else {
                continue;
            };
            let clickable_ancestor = self
                .ancestors(region.id)
                .skip(1)
                .find(|a| a.is_clickable());
            if let Some(ancestor) = clickable_ancestor {
                if !binding.stop_propagation {
                    return Err(Error::diagram(format!(
                        "'{}' is nested in clickable '{}' but does not stop propagation",
                        region.label, ancestor.label
                    )));
                }
            }
        }
        Ok(())
    }

    /// The AWS multi-tier reference architecture.
    pub fn aws_multi_tier() -> Self {
        use ComponentId as C;
        use RegionKind as K;

        let mut d = Diagram::new(
            "AWS Multi-Tier Architecture",
            "Production-Ready, Highly Available, Scalable Design",
        );

        d.push(
            None,
            RegionSpec::new(K::Source, "Internet / Users", Tone::Green).glyph(Glyph::Globe),
        );

        let edge = d.push(None, RegionSpec::new(K::Tier, "Edge", Tone::Slate));
        d.push(
            Some(edge),
            RegionSpec::new(K::Service, "Route 53", Tone::Orange)
                .caption("DNS Service")
                .glyph(Glyph::Globe)
                .on_click(ClickBinding::select(C::Route53)),
        );
        d.push(
            Some(edge),
            RegionSpec::new(K::Service, "CloudFront", Tone::Purple)
                .caption("CDN")
                .glyph(Glyph::Zap)
                .on_click(ClickBinding::select(C::CloudFront)),
        );
        d.push(
            Some(edge),
            RegionSpec::new(K::Service, "AWS WAF", Tone::Red)
                .caption("Firewall")
                .glyph(Glyph::Shield)
                .on_click(ClickBinding::select(C::Waf)),
        );

        let vpc = d.push(
            None,
            RegionSpec::new(K::Boundary, "VPC (Virtual Private Cloud)", Tone::Blue)
                .glyph(Glyph::Lock)
                .on_click(ClickBinding::select(C::Vpc)),
        );

        let lb_tier = d.push(Some(vpc), RegionSpec::new(K::Tier, "Load Balancing", Tone::Slate));
        d.push(
            Some(lb_tier),
            RegionSpec::new(K::Service, "Application Load Balancer", Tone::Blue)
                .caption("Multi-AZ Distribution")
                .glyph(Glyph::Refresh)
                .on_click(ClickBinding::select_and_stop(C::Alb)),
        );

        let grid = d.push(Some(vpc), RegionSpec::new(K::ZoneGrid, "Availability Zones", Tone::Cyan));
        for (zone_label, db_label) in [
            ("Availability Zone 1", "RDS Primary"),
            ("Availability Zone 2", "RDS Standby"),
        ] {
            let zone = d.push(Some(grid), RegionSpec::new(K::Zone, zone_label, Tone::Cyan));

            let public = d.push(Some(zone), RegionSpec::new(K::Subnet, "Public Subnet", Tone::Green));
            d.push(
                Some(public),
                RegionSpec::new(K::Instance, "EC2 Instance", Tone::Amber)
                    .glyph(Glyph::Server)
                    .on_click(ClickBinding::select_and_stop(C::Ec2)),
            );

            let private =
                d.push(Some(zone), RegionSpec::new(K::Subnet, "Private Subnet", Tone::Slate));
            d.push(
                Some(private),
                RegionSpec::new(K::Instance, db_label, Tone::Indigo)
                    .glyph(Glyph::Database)
                    .on_click(ClickBinding::select_and_stop(C::Rds)),
            );
            d.push(
                Some(private),
                RegionSpec::new(K::Instance, "ElastiCache", Tone::Pink)
                    .glyph(Glyph::Zap)
                    .on_click(ClickBinding::select_and_stop(C::ElastiCache)),
            );
        }

        let storage = d.push(None, RegionSpec::new(K::Tier, "Storage & Monitoring", Tone::Slate));
        d.push(
            Some(storage),
            RegionSpec::new(K::Service, "Amazon S3", Tone::Emerald)
                .caption("Object Storage")
                .glyph(Glyph::HardDrive)
                .on_click(ClickBinding::select(C::S3)),
        );
        d.push(
            Some(storage),
            RegionSpec::new(K::Service, "CloudWatch", Tone::Yellow)
                .caption("Monitoring")
                .glyph(Glyph::Activity)
                .on_click(ClickBinding::select(C::CloudWatch)),
        );

        d
    }

    /// Find the first region with the given label (document order).
    pub fn find_by_label(&self, label: &str) -> Option<RegionId> {
        self.iter().find(|r| r.label == label).map(|r| r.id)
    }
}
