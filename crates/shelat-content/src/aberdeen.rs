//! Aberdeen landing page copy

use shelat_tabs::TabItem;

use crate::model::{AberdeenHeroContent, AberdeenPage, CallToAction, InvisalignContent};

const INVISALIGN_CARD_IMAGE: &str = "/images/teal-card-bg-masked.png";

pub(crate) fn aberdeen_page() -> AberdeenPage {
    AberdeenPage {
        hero: AberdeenHeroContent {
            title: "Effortless Smiles\nin Aberdeen".to_string(),
            subtitle: "Expert Orthodontics with Fewer Visits!".to_string(),
            cta: CallToAction::new("BOOK A CONSULTATION", "/contact"),
            bg_image: "/images/aberdeen-hero-bg-7427c5.png".to_string(),
        },
        invisalign: InvisalignContent {
            tabs: invisalign_tabs(),
            title: "Clear, comfortable\nand convenient\nteeth straightening".to_string(),
            description: "At our Aberdeen practice we treat over 150 cases a year with \
                Invisalign clear aligners. Our many years of experience ensures we can \
                successfully treat even complex cases with Invisalign treatment."
                .to_string(),
            cta: CallToAction::new("DISCOVER MORE", "/invisalign"),
        },
    }
}

fn invisalign_tabs() -> Vec<TabItem> {
    [
        ("adults", "Invisalign® for adults", "Adult Invisalign patient smiling"),
        ("teens", "Invisalign® for TEENS", "Teen Invisalign patient"),
        ("kids", "Invisalign® for KIDS", "Child Invisalign patient"),
    ]
    .into_iter()
    .map(|(id, label, alt)| TabItem {
        id: id.to_string(),
        label: label.to_string(),
        image: INVISALIGN_CARD_IMAGE.to_string(),
        image_alt: alt.to_string(),
    })
    .collect()
}
