use shelat_content::HeroContent;

use crate::html::HtmlWriter;

pub fn hero(w: &mut HtmlWriter, content: &HeroContent) {
    w.open("section", &[("class", Some("hero"))])
        .open("div", &[("class", Some("hero__layout"))])
        .open("div", &[("class", Some("hero__text"))])
        .open("div", &[("class", Some("hero__copy"))])
        .element("h1", &[("class", Some("hero__title"))], &content.title)
        .element("p", &[("class", Some("hero__description"))], &content.description)
        .close()
        .close();

    w.open("div", &[("class", Some("hero__media"))])
        .void(
            "img",
            &[
                ("src", Some(content.image_src.as_str())),
                ("alt", Some(content.image_alt.as_str())),
                ("class", Some("fill cover")),
                ("sizes", Some("(max-width: 1023px) 100vw, 49vw")),
                ("fetchpriority", Some("high")),
            ],
        )
        .close();

    w.close().close();
}
