//! Home page copy

use crate::model::{BrightHeroContent, CallToAction, GoogleReview, HeroContent, HomePage};

pub(crate) fn home_page() -> HomePage {
    HomePage {
        bright_hero: BrightHeroContent {
            title: "Confident smiles, crafted around you".to_string(),
            subtitle: "Specialist orthodontic care for children, teens and adults.".to_string(),
            cta: CallToAction::new("Book a consultation", "/contact"),
            hero_image: "/images/bright-hero-person.png".to_string(),
            hero_image_alt: "Smiling orthodontic patient".to_string(),
            google_review: GoogleReview {
                rating: "4.9".to_string(),
                review_count: "250+".to_string(),
            },
        },
        hero: HeroContent {
            title: "Orthodontic treatments".to_string(),
            description: "Every smile is unique, which is why all of our treatments at Dr Devesh \
                Shelat are 100% custom-tailored to the individual patient. With the latest \
                technology and our professionally trained team, we strive to provide an \
                exceptional treatment experience to all our patients."
                .to_string(),
            image_src: "/images/hero-image.png".to_string(),
            image_alt: "Orthodontic treatment consultation".to_string(),
        },
    }
}
