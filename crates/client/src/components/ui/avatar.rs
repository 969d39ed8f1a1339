use dioxus::prelude::*;

use crate::panels::Avatar;

const SILHOUETTE: &str = "M7.5 6a4.5 4.5 0 119 0 4.5 4.5 0 01-9 0zM3.751 20.105a8.25 8.25 0 0116.498 0 .75.75 0 01-.714.77l-.025-.002-.025-.002a7.487 7.487 0 00-14.966 0l-.025.002-.025.002a.75.75 0 01-.714-.77z";

/// Profile picture, or a silhouette when the backend sent none.
#[component]
pub fn AvatarImage(avatar: Avatar) -> Element {
    match avatar {
        Avatar::Picture { url, alt } => rsx! {
            img {
                src: "{url}",
                alt: "{alt}",
                class: "w-10 h-10 rounded-full border-2 border-gray-600",
            }
        },
        Avatar::Fallback => rsx! {
            div { class: "w-10 h-10 rounded-full border-2 border-gray-600 bg-gray-600 flex items-center justify-center",
                svg {
                    class: "w-6 h-6 text-gray-400",
                    fill: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        fill_rule: "evenodd",
                        clip_rule: "evenodd",
                        d: SILHOUETTE,
                    }
                }
            }
        },
    }
}
