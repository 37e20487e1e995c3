// SPDX-License-Identifier: MPL-2.0
//! Built-in sample catalog shown when no catalog source is configured.

use super::{Catalog, Page};

const PROJECT_NAME: &str = "Architectural Design Portfolio";

/// (id, pexels photo id, title, description)
const PAGES: [(&str, u32, &str, &str); 8] = [
    (
        "cover",
        323780,
        "Modern Architecture Collection",
        "A curated selection of contemporary architectural designs",
    ),
    (
        "page-1",
        323775,
        "Urban Planning",
        "Innovative urban spaces that blend functionality with aesthetics",
    ),
    (
        "page-2",
        2291367,
        "Interior Design",
        "Thoughtfully designed interior spaces with attention to detail",
    ),
    (
        "page-3",
        1571460,
        "Sustainable Design",
        "Eco-friendly architectural solutions for modern living",
    ),
    (
        "page-4",
        323776,
        "Minimalist Approach",
        "Clean lines and simple forms that emphasize space and light",
    ),
    (
        "page-5",
        1571468,
        "Cultural Integration",
        "Designs that respect and incorporate local cultural elements",
    ),
    (
        "page-6",
        2079246,
        "Future Vision",
        "Forward-thinking designs that anticipate tomorrow's needs",
    ),
    (
        "page-7",
        1029606,
        "Natural Integration",
        "Harmonious blend of architecture and natural environments",
    ),
];

fn pexels_url(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1280&fit=crop"
    )
}

pub(super) fn catalog() -> Catalog {
    Catalog {
        project_name: PROJECT_NAME.to_string(),
        pages: PAGES
            .iter()
            .map(|(id, photo, title, description)| Page {
                id: (*id).to_string(),
                image: pexels_url(*photo),
                title: Some((*title).to_string()),
                description: Some((*description).to_string()),
            })
            .collect(),
    }
}
