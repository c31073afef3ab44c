// SPDX-License-Identifier: MPL-2.0
//! Compiled-in showcase catalog.

use super::{AssetRef, Category, ContactDetails, Highlight, ItemId, ShowcaseItem, StudioInfo};

const THUMBNAIL: &str =
    "https://threejs.org/examples/models/gltf/DamagedHelmet/glTF/Default_albedo.jpg";

pub(super) fn hero_asset() -> AssetRef {
    AssetRef::new("builtin:helmet")
}

pub(super) fn studio() -> StudioInfo {
    StudioInfo {
        name: "M3DAN STUDIO ANIMATION".to_string(),
        tagline: "Bringing Ideas to Life in 3D".to_string(),
        description: "We are a cutting-edge 3D animation studio specializing in character \
                      modeling and product visualization. Our team combines artistic vision \
                      with technical expertise to create stunning 3D experiences that \
                      captivate and inspire."
            .to_string(),
        services: [
            "Character Modeling & Animation",
            "Product Visualization",
            "3D Rendering & Post-Production",
            "Interactive 3D Experiences",
            "VR/AR Content Creation",
            "Motion Graphics",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        contact: ContactDetails {
            email: "hello@m3danstudio.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Creative District, Animation City, AC 12345".to_string(),
        },
        highlights: vec![
            highlight("5+", "Years of Experience", "Creating stunning 3D content"),
            highlight("100+", "Projects Completed", "Across various industries"),
            highlight("50+", "Happy Clients", "From startups to enterprises"),
        ],
    }
}

pub(super) fn items() -> Vec<ShowcaseItem> {
    vec![
        item(
            1,
            "Cyber Warrior",
            "Character",
            "Futuristic warrior character with advanced armor and weaponry",
            "builtin:helmet",
            &["idle", "walk", "attack"],
            true,
        ),
        item(
            2,
            "Luxury Watch",
            "Product",
            "High-end luxury timepiece with intricate mechanical details",
            "builtin:torus",
            &["rotate", "zoom"],
            false,
        ),
        item(
            3,
            "Dragon Guardian",
            "Character",
            "Mythical dragon character with dynamic poses and fire effects",
            "builtin:octahedron",
            &["fly", "roar", "attack"],
            true,
        ),
        item(
            4,
            "Gaming Console",
            "Product",
            "Next-generation gaming console with RGB lighting effects",
            "builtin:cube",
            &["showcase", "lighting"],
            false,
        ),
        item(
            5,
            "Space Explorer",
            "Character",
            "Astronaut character designed for sci-fi adventures",
            "builtin:icosahedron",
            &["float", "gesture", "tool_use"],
            false,
        ),
        item(
            6,
            "Smart Phone",
            "Product",
            "Sleek smartphone design with premium materials and finishes",
            "builtin:cube",
            &["rotate_360", "interface"],
            true,
        ),
    ]
}

fn highlight(value: &str, label: &str, caption: &str) -> Highlight {
    Highlight {
        value: value.to_string(),
        label: label.to_string(),
        caption: caption.to_string(),
    }
}

fn item(
    id: u32,
    title: &str,
    category: &str,
    description: &str,
    asset: &str,
    animations: &[&str],
    featured: bool,
) -> ShowcaseItem {
    ShowcaseItem {
        id: ItemId(id),
        title: title.to_string(),
        category: Category::new(category),
        description: description.to_string(),
        asset_ref: AssetRef::new(asset),
        thumbnail_ref: AssetRef::new(THUMBNAIL),
        animations: animations.iter().map(ToString::to_string).collect(),
        featured,
    }
}
