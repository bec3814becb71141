//! Static page content: the records behind the portfolio grid, the
//! testimonial carousel, the contact cards, and the section map. All of it
//! is owned by the binary and read-only.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Eleanor Vance",
        position: "CEO, TechStart Inc.",
        rating: 5,
        comment: "Absolutely impressed with the design and functionality! My website exceeded my expectations and has significantly boosted my business growth. The attention to detail is remarkable.",
    },
    Testimonial {
        name: "Arthur Finch",
        position: "Marketing Director",
        rating: 5,
        comment: "Excellent SEO work that delivered real results. We've seen a 300% increase in organic traffic since Prestige Websites optimized our site. Their expertise is unmatched.",
    },
    Testimonial {
        name: "Victoria Sinclair",
        position: "Creative Director",
        rating: 5,
        comment: "The team is incredibly professional and attentive to every detail. They perfectly captured the essence of my brand and created something truly spectacular. Highly recommended!",
    },
    Testimonial {
        name: "Edward Blackwood",
        position: "Business Owner",
        rating: 5,
        comment: "Impeccable service from start to finish. The design is modern, the navigation is intuitive, and the performance is outstanding. Our clients love the new website!",
    },
    Testimonial {
        name: "Thomas Beckett",
        position: "E-commerce Manager",
        rating: 5,
        comment: "I am extremely happy with the final result. The site is lightning-fast, looks amazing on all devices, and our conversion rates have improved dramatically.",
    },
    Testimonial {
        name: "Henry Sterling",
        position: "Startup Founder",
        rating: 5,
        comment: "Prestige Websites completely transformed our online presence. Their SEO strategy is top-notch and their ongoing support has been invaluable to our success.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub image: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[Project {
    title: "NeuralFlow AI",
    description: "A cutting-edge AI platform featuring advanced neural networks and machine learning capabilities. Built with modern technologies for optimal performance and user experience.",
    tags: &["Next.js", "TailwindCSS", "TypeScript", "AI/ML"],
    link: "https://neuralflowai.vercel.app/",
    image: Some("https://assets.macaly-user-data.dev/kffp567qe9h57rg2vr1rolyc/rpcf7gb6yvup5eoym6i0lkst/8PiAj4CTk4Na-Gt40epYF/neuralflowai.png"),
}];

/// An outbound contact action. Activating one hands the href to the
/// platform (`mailto:`, `https:`, `wa.me`) and nothing is awaited back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactChannel {
    pub title: &'static str,
    pub display: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email Us",
        display: "officialprestigewebsites@gmail.com",
        href: "mailto:officialprestigewebsites@gmail.com",
    },
    ContactChannel {
        title: "Instagram",
        display: "@prestige_websites",
        href: "https://www.instagram.com/prestige_websites?igsh=MWtwdGR3aGg4ZmtkbQ%3D%3D&utm_source=qr",
    },
    ContactChannel {
        title: "TikTok",
        display: "@prestigewebsites",
        href: "https://www.tiktok.com/@prestigewebsites?_t=ZM-8yUm7EJ3g5G&_r=1",
    },
    ContactChannel {
        title: "WhatsApp",
        display: "+355 69 295 3131",
        href: "https://wa.me/355692953131",
    },
];

pub const REVIEW_URL: &str = "https://maps.app.goo.gl/3qtnYprM5AaWbqRw8?g_st=ipc";
pub const CONTACT_EMAIL_URI: &str = "mailto:officialprestigewebsites@gmail.com";

/// Page sections in document order, paired with their nav copy keys.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("portfolio", "nav.portfolio"),
    ("testimonials", "nav.testimonials"),
    ("contact", "nav.contact"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "60+", label: "Websites Launched" },
    Stat { value: "5\u{2605}", label: "Client Rating" },
    Stat { value: "40+", label: "Countries" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::{Pager, PAGE_SIZE};

    #[test]
    fn testimonial_ratings_stay_in_range() {
        for record in TESTIMONIALS {
            assert!((1..=5).contains(&record.rating), "{} has a bad rating", record.name);
        }
    }

    #[test]
    fn shipped_testimonials_fill_whole_pages() {
        assert_eq!(TESTIMONIALS.len() % PAGE_SIZE, 0);
        assert_eq!(Pager::new(TESTIMONIALS.len()).page_count(), 2);
    }

    #[test]
    fn every_contact_channel_targets_a_platform_handler() {
        for channel in CONTACT_CHANNELS {
            assert!(
                channel.href.starts_with("mailto:")
                    || channel.href.starts_with("tel:")
                    || channel.href.starts_with("https://"),
                "{} has an unhandled scheme",
                channel.title
            );
        }
    }

    #[test]
    fn nav_sections_cover_the_page_in_order() {
        let ids: Vec<&str> = NAV_SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["home", "about", "portfolio", "testimonials", "contact"]);
    }
}
