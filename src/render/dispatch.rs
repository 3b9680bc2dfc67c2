//! Template dispatch
//!
//! The route table maps each section to exactly one template and the
//! datasets it consumes. Dispatch is total: every [`SectionId`] has a route,
//! and unrecognized string ids render the overview template.

use serde::Serialize;

use crate::data::{DatasetId, DatasetRegistry};
use crate::section::{SectionId, SectionRouter};

use super::model::Panel;
use super::templates;

/// Rendering templates, one per section
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Recommendations,
    Overview,
    Insurance,
    Demographics,
    Regional,
    Prevalence,
}

impl TemplateId {
    /// Template used for ids that resolve to nothing
    pub const FALLBACK: TemplateId = TemplateId::Overview;
}

/// Section → template → datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub section: SectionId,
    pub template: TemplateId,
    pub datasets: &'static [DatasetId],
}

/// Static route table, indexed in [`SectionId::ALL`] order
pub const ROUTES: [Route; 6] = [
    Route {
        section: SectionId::Recommendations,
        template: TemplateId::Recommendations,
        datasets: &[DatasetId::Recommendations],
    },
    Route {
        section: SectionId::Overview,
        template: TemplateId::Overview,
        datasets: &[DatasetId::Overview],
    },
    Route {
        section: SectionId::Insurance,
        template: TemplateId::Insurance,
        datasets: &[DatasetId::Insurance],
    },
    Route {
        section: SectionId::Demographics,
        template: TemplateId::Demographics,
        datasets: &[DatasetId::Sex, DatasetId::AgeGroups],
    },
    Route {
        section: SectionId::Regional,
        template: TemplateId::Regional,
        datasets: &[DatasetId::Regions],
    },
    Route {
        section: SectionId::Prevalence,
        template: TemplateId::Prevalence,
        datasets: &[DatasetId::Prevalence],
    },
];

/// Route for a section
pub fn route_for(section: SectionId) -> &'static Route {
    &ROUTES[section as usize]
}

/// Template for a raw section id, falling back to the overview template
pub fn template_for_id(id: &str) -> TemplateId {
    match id.parse::<SectionId>() {
        Ok(section) => route_for(section).template,
        Err(_) => TemplateId::FALLBACK,
    }
}

/// Renders sections from a shared, read-only registry
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    registry: &'a DatasetRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a DatasetRegistry) -> Self {
        Self { registry }
    }

    /// Render whatever section the router currently holds
    pub fn render(&self, router: &SectionRouter) -> Panel {
        self.render_section(router.active_id())
    }

    pub fn render_section(&self, section: SectionId) -> Panel {
        self.render_template(route_for(section).template)
    }

    /// Render by raw id; unknown ids get the overview template
    pub fn render_id(&self, id: &str) -> Panel {
        self.render_template(template_for_id(id))
    }

    pub fn render_template(&self, template: TemplateId) -> Panel {
        let r = self.registry;
        match template {
            TemplateId::Recommendations => templates::recommendations(r.recommendations()),
            TemplateId::Overview => templates::overview(r.overview()),
            TemplateId::Insurance => templates::insurance(r.insurance(), r.insurance_significance()),
            TemplateId::Demographics => {
                templates::demographics(r.sex(), r.age_groups(), r.sex_significance())
            }
            TemplateId::Regional => templates::regional(r.regions(), r.region_significance()),
            TemplateId::Prevalence => templates::prevalence(r.prevalence()),
        }
    }

    /// Render all sections in menu order
    pub fn render_all(&self) -> Vec<Panel> {
        SectionId::ALL
            .iter()
            .map(|section| self.render_section(*section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::model::ChartKind;

    #[test]
    fn test_route_table_is_indexed_by_section() {
        for (route, section) in ROUTES.iter().zip(SectionId::ALL) {
            assert_eq!(route.section, section);
            assert_eq!(route_for(section).section, section);
        }
    }

    #[test]
    fn test_panel_datasets_match_route() {
        let registry = DatasetRegistry::default();
        let renderer = Renderer::new(&registry);

        for route in &ROUTES {
            let panel = renderer.render_section(route.section);
            assert_eq!(panel.section, route.section);
            assert_eq!(panel.template, route.template);
            assert_eq!(panel.datasets, route.datasets.to_vec());
        }
    }

    #[test]
    fn test_unknown_id_uses_overview_template() {
        assert_eq!(template_for_id("insurance"), TemplateId::Insurance);
        assert_eq!(template_for_id("nope"), TemplateId::Overview);

        let registry = DatasetRegistry::default();
        let panel = Renderer::new(&registry).render_id("nope");
        assert_eq!(panel.section, SectionId::Overview);
    }

    #[test]
    fn test_render_is_deterministic() {
        let registry = DatasetRegistry::default();
        let renderer = Renderer::new(&registry);

        for section in SectionId::ALL {
            assert_eq!(renderer.render_section(section), renderer.render_section(section));
        }
    }

    #[test]
    fn test_render_follows_router() {
        let registry = DatasetRegistry::default();
        let renderer = Renderer::new(&registry);
        let mut router = SectionRouter::new();

        assert_eq!(renderer.render(&router).section, SectionId::Overview);

        router.select("regional");
        let panel = renderer.render(&router);
        assert_eq!(panel.section, SectionId::Regional);
        assert_eq!(panel.chart(ChartKind::Bar).unwrap().points.len(), 4);
    }

    #[test]
    fn test_render_all_covers_menu() {
        let registry = DatasetRegistry::default();
        let panels = Renderer::new(&registry).render_all();
        let sections: Vec<SectionId> = panels.iter().map(|p| p.section).collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }
}
