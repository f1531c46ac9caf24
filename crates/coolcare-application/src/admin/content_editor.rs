//! Editor for the public site's copy.

use coolcare_core::admin::{ContentItem, SiteContent, Testimonial};
use coolcare_core::error::{CoolcareError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
    Title,
    Subtitle,
    CtaLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaField {
    Title,
    Subtitle,
    Button,
}

#[derive(Debug, Clone, Default)]
pub struct ContentEditor {
    content: SiteContent,
}

impl ContentEditor {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn into_content(self) -> SiteContent {
        self.content
    }

    pub fn set_hero(&mut self, field: HeroField, value: impl Into<String>) {
        let hero = &mut self.content.hero;
        let slot = match field {
            HeroField::Title => &mut hero.title,
            HeroField::Subtitle => &mut hero.subtitle,
            HeroField::CtaLabel => &mut hero.cta_label,
        };
        *slot = value.into();
    }

    pub fn set_cta(&mut self, field: CtaField, value: impl Into<String>) {
        let cta = &mut self.content.cta;
        let slot = match field {
            CtaField::Title => &mut cta.title,
            CtaField::Subtitle => &mut cta.subtitle,
            CtaField::Button => &mut cta.button,
        };
        *slot = value.into();
    }

    /// Appends a service card. The name is required.
    pub fn add_service(&mut self, item: ContentItem) -> Result<()> {
        if item.name.trim().is_empty() {
            return Err(CoolcareError::validation("Service name is required"));
        }
        self.content.services.push(item);
        Ok(())
    }

    pub fn remove_service(&mut self, index: usize) -> Option<ContentItem> {
        (index < self.content.services.len()).then(|| self.content.services.remove(index))
    }

    /// Appends a testimonial. The name is required.
    pub fn add_testimonial(&mut self, testimonial: Testimonial) -> Result<()> {
        if testimonial.name.trim().is_empty() {
            return Err(CoolcareError::validation("Testimonial name is required"));
        }
        self.content.testimonials.push(testimonial);
        Ok(())
    }

    pub fn remove_testimonial(&mut self, index: usize) -> Option<Testimonial> {
        (index < self.content.testimonials.len()).then(|| self.content.testimonials.remove(index))
    }
}
