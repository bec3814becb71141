//! Language selection and the bilingual copy table.
//!
//! The table is immutable and loaded with the binary; lookup is a pure
//! function. A key that is missing from a table comes back as the key
//! itself so the regression is visible on the page instead of blanking it.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Al,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Al];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Al => "al",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "al" => Some(Self::Al),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Al => "Shqip",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "\u{1f1fa}\u{1f1f8}",
            Self::Al => "\u{1f1e6}\u{1f1f1}",
        }
    }
}

/// Looks up `key` in the table for `language`. Missing keys fall back to
/// the key itself.
pub fn translate(language: Language, key: &'static str) -> &'static str {
    let localized = match language {
        Language::En => english(key),
        Language::Al => albanian(key),
    };
    localized.unwrap_or(key)
}

/// The closed key set. Every key listed here must resolve in every
/// supported language; `table_is_complete_in_every_language` enforces it.
pub const KEYS: &[&str] = &[
    "nav.home",
    "nav.about",
    "nav.portfolio",
    "nav.testimonials",
    "nav.contact",
    "nav.getStarted",
    "hero.title",
    "hero.subtitle",
    "hero.cta",
    "hero.learnMore",
    "about.title",
    "about.whoWeAre.title",
    "about.whoWeAre.content",
    "about.whyChoose.title",
    "about.whyChoose.content",
    "about.strategic.title",
    "about.strategic.content",
    "about.values.title",
    "about.values.content",
    "about.stats.projects",
    "about.stats.clients",
    "about.stats.growth",
    "about.stats.experience",
    "portfolio.title",
    "portfolio.subtitle",
    "portfolio.ecommerce.title",
    "portfolio.ecommerce.description",
    "portfolio.local.title",
    "portfolio.local.description",
    "portfolio.saas.title",
    "portfolio.saas.description",
    "portfolio.healthcare.title",
    "portfolio.healthcare.description",
    "portfolio.viewProject",
    "portfolio.exploreProject",
    "portfolio.startProject",
    "testimonials.title",
    "testimonials.subtitle",
    "testimonials.client1.name",
    "testimonials.client1.role",
    "testimonials.client1.content",
    "testimonials.client2.name",
    "testimonials.client2.role",
    "testimonials.client2.content",
    "testimonials.client3.name",
    "testimonials.client3.role",
    "testimonials.client3.content",
    "contact.title",
    "contact.subtitle",
    "contact.form.name",
    "contact.form.email",
    "contact.form.company",
    "contact.form.message",
    "contact.form.submit",
    "contact.info.title",
    "contact.info.description",
    "contact.info.email",
    "contact.info.phone",
    "contact.info.address",
    "footer.description",
    "footer.quickLinks",
    "footer.services",
    "footer.services.seo",
    "footer.services.content",
    "footer.services.local",
    "footer.services.technical",
    "footer.contact",
    "footer.rights",
];

fn english(key: &str) -> Option<&'static str> {
    let value = match key {
        "nav.home" => "Home",
        "nav.about" => "About Us",
        "nav.portfolio" => "Portfolio",
        "nav.testimonials" => "Testimonials",
        "nav.contact" => "Contact",
        "nav.getStarted" => "Get Started",
        "hero.title" => "Crafting Digital Masterpieces",
        "hero.subtitle" => "Web Design & SEO That Elevates Your Brand",
        "hero.cta" => "Start Your Project",
        "hero.learnMore" => "Learn More",
        "about.title" => "About Us",
        "about.whoWeAre.title" => "Who We Are",
        "about.whoWeAre.content" => "We are a boutique web design and development agency focused on creating high-impact digital experiences. At Prestige Websites, every website is thoughtfully built to match your brand, connect with your audience, and drive long-term growth. Our clients range from ambitious startups to established businesses that understand how powerful a strong online presence can be when done right.",
        "about.whyChoose.title" => "Why Choose Us",
        "about.whyChoose.content" => "We combine sharp design, smart strategy, and performance-first development to create websites that don't just look great — they deliver measurable results. Our process is detail-driven and intentional, with every decision based on your business goals, your users, and how to turn attention into action. From the structure and layout to the tiniest animations, everything is crafted with purpose. We go beyond launch — continuously optimizing your site, improving performance, enhancing user experience, and adapting to your growth so your website keeps delivering long after it's live. This isn't just web design. It's a long-term digital asset built to grow your business.",
        "about.strategic.title" => "Strategic SEO Built for Growth",
        "about.strategic.content" => "Having a great website means nothing if no one sees it. That's why SEO isn't an add-on in our process — it's built into the foundation of every project we take on. Search Engine Optimization (SEO) is what helps your website rank higher on Google and other search engines when potential customers search for the products or services you offer. Without it, your site is just another invisible page on the internet. With it, your business becomes discoverable, trusted, and chosen. We go far beyond basic keyword stuffing. Our SEO approach is data-driven, strategic, and constantly evolving. We have specialists who track, analyze, and refine your SEO performance every single month — monitoring traffic patterns, studying user behavior, reviewing ranking positions, and adjusting content and structure based on real results. This means your site doesn't just launch optimized — it stays optimized.",
        "about.values.title" => "What We Value",
        "about.values.content" => "We value transparency in every step of the process — from open communication and clear timelines to honest feedback and accountability. We prioritize performance by building fast, responsive, and conversion-focused websites backed by data and real-world results. Collaboration is at the core of how we work; your vision and goals guide every decision we make. And above all, we value quality — no shortcuts, no compromises, just work we're proud to stand behind.",
        "about.stats.projects" => "Projects",
        "about.stats.clients" => "Client Rating",
        "about.stats.growth" => "Average Growth",
        "about.stats.experience" => "Years Experience",
        "portfolio.title" => "Our Work",
        "portfolio.subtitle" => "Discover our portfolio of stunning websites and digital experiences that have transformed businesses and captivated audiences worldwide.",
        "portfolio.ecommerce.title" => "E-commerce Growth",
        "portfolio.ecommerce.description" => "Increased organic traffic by 300% for a fashion retailer through comprehensive keyword optimization and technical SEO improvements.",
        "portfolio.local.title" => "Local Business Domination",
        "portfolio.local.description" => "Helped a restaurant chain achieve #1 local rankings across 15 cities, resulting in 250% increase in foot traffic.",
        "portfolio.saas.title" => "SaaS Lead Generation",
        "portfolio.saas.description" => "Generated 500+ qualified leads monthly for a B2B software company through content marketing and SEO strategy.",
        "portfolio.healthcare.title" => "Healthcare Authority",
        "portfolio.healthcare.description" => "Established a medical practice as the leading authority in their specialty, increasing patient inquiries by 400%.",
        "portfolio.viewProject" => "View Project",
        "portfolio.exploreProject" => "Explore Project",
        "portfolio.startProject" => "Start Your Project",
        "testimonials.title" => "What Our Clients Say",
        "testimonials.subtitle" => "Real results from real businesses that trusted us with their SEO success",
        "testimonials.client1.name" => "Sarah Johnson",
        "testimonials.client1.role" => "Marketing Director, TechFlow Solutions",
        "testimonials.client1.content" => "Working with this team transformed our online presence completely. Our organic traffic increased by 400% in just 6 months, and we're now ranking #1 for our most important keywords.",
        "testimonials.client2.name" => "Michael Chen",
        "testimonials.client2.role" => "CEO, GreenLeaf Organics",
        "testimonials.client2.content" => "The ROI from their SEO work has been incredible. We've seen a 300% increase in qualified leads and our revenue has grown by 250% year-over-year.",
        "testimonials.client3.name" => "Emily Rodriguez",
        "testimonials.client3.role" => "Founder, Urban Wellness Studio",
        "testimonials.client3.content" => "Their local SEO expertise helped us dominate our market. We went from page 3 to consistent #1 rankings, and our bookings increased by 180%.",
        "contact.title" => "Ready to Grow Your Business?",
        "contact.subtitle" => "Let's discuss how we can help you achieve your SEO goals and drive sustainable growth",
        "contact.form.name" => "Full Name",
        "contact.form.email" => "Email Address",
        "contact.form.company" => "Company Name",
        "contact.form.message" => "Tell us about your project",
        "contact.form.submit" => "Send Message",
        "contact.info.title" => "Get in Touch",
        "contact.info.description" => "Ready to take your SEO to the next level? Contact us today for a free consultation.",
        "contact.info.email" => "hello@seoexperts.com",
        "contact.info.phone" => "+1 (555) 123-4567",
        "contact.info.address" => "123 Digital Avenue, Tech City, TC 12345",
        "footer.description" => "Transforming businesses through strategic SEO and digital marketing excellence.",
        "footer.quickLinks" => "Quick Links",
        "footer.services" => "Services",
        "footer.services.seo" => "SEO Optimization",
        "footer.services.content" => "Content Marketing",
        "footer.services.local" => "Local SEO",
        "footer.services.technical" => "Technical SEO",
        "footer.contact" => "Contact Info",
        "footer.rights" => "All rights reserved.",
        _ => return None,
    };

    Some(value)
}

fn albanian(key: &str) -> Option<&'static str> {
    let value = match key {
        "nav.home" => "Kryefaqja",
        "nav.about" => "Rreth Nesh",
        "nav.portfolio" => "Projektet",
        "nav.testimonials" => "Vlerësime",
        "nav.contact" => "Kontakt",
        "nav.getStarted" => "Fillo Tani",
        "hero.title" => "Krijimi i kryeveprave Dixhitale",
        "hero.subtitle" => "Web Design & SEO Që Rrit Biznesin Tuaj",
        "hero.cta" => "Fillo Projektin Tënd",
        "hero.learnMore" => "Mëso Më Shumë",
        "about.title" => "Rreth Nesh",
        "about.whoWeAre.title" => "Kush Jemi Ne",
        "about.whoWeAre.content" => "Ne jemi nje agienci e dizajnit dhe zhvillimit te web-it e fokusuar ne krijimin e pervojave dixhitale me ndikim te lart.Ne Prestige Websites, Çdo web ndërtohet me kujdes për tu përshtatur me marken tuaj, per tu lidhur me audiencen tuaj dhe per te drejtuar rritjen afatgjate.Klientet tanë varione nga biznese fillestare ambicioze deri te biznese te vendosura qe kuptone se sa e fuqishme mund te jete nje prezencë e fortë online kur bëhet siç duhet.",
        "about.whyChoose.title" => "Pse të Na Zgjidhni",
        "about.whyChoose.content" => "Ne kombinojmë dizajnin e mprehtë, strategjinë e zgjuar dhe zhvillimin e performancës së parë për të krijuar web-e që nuk duken vetëm të mira — por që japin edhe rezultate të matshme. Procesi ynë eshte i drejtuar nga çdo vendim të bazuar ne qellimet e biznesit tuaj, përdoruesit tuaj dhe se si të ktheni vëmendjen në veprim. Nga struktura dhe paraqitja deri te animacionet më të vogla, gjithçka është krijuar me qëllim. Ne shkojmë pertej krijimit — optimizojmë vazhdimisht faqen tuaj, përmirësojmë performancën, rrisim përvojën e përdoruesit dhe e përshtasim me rritjen tuaj në mënyrë që web-i juaj të vazhdojë të japë rezultate edhe shumë kohë pas lansimit fillestar. Kjo nuk është thjesht një krijim web-i,është një investim afatgjatë për të rritur biznesin tuaj.",
        "about.strategic.title" => "SEO Strategjik i Ndërtuar për Rritje",
        "about.strategic.content" => "Të kesh një web të shkëlqyer nuk do të thotë asgjë nëse askush nuk e sheh. Kjo është arsyeja pse SEO nuk është një shtesë në procesin tonë — është e ndërtuar në themelin e çdo projekti që marrim përsipër. Optimizimi i Motorëve të Kërkimit (SEO) është ajo që ndihmon web-in tuaj të renditet më lart në Google dhe motorë të tjerë kërkimi kur klientët e mundshëm kërkojnë për produktet ose shërbimet që ofroni. Pa të, faqja juaj është thjesht një faqe tjetër e padukshme në internet. Me të, biznesi juaj bëhet i zbulueshëm, i besuar dhe i zgjedhur. Ne shkojmë shumë përtej mbushjes bazike të fjalëve kyçe. Qasja jonë SEO është e drejtuar nga të dhënat, strategjike dhe në evoluim të vazhdueshëm. Kemi specialistë që gjurmojnë, analizojnë dhe rafinojnë performancën tuaj SEO çdo muaj — monitorojnë modelet e trafikut, studiojnë sjelljen e përdoruesve, rishikojnë pozicionet e renditjes dhe rregullojnë përmbajtjen dhe strukturën bazuar në rezultate të vërteta. Kjo do të thotë që faqja juaj nuk krijohet vetëm dhe optimohet një herë, por merr përditësime të rregullta për të mbetur gjithmonë e tillë.",
        "about.values.title" => "Çfarë Vlerësojmë",
        "about.values.content" => "Ne vlerësojmë transparencën në çdo hap të procesit — nga komunikimi i hapur dhe afatet e qarta deri te reagimet e ndershme dhe përgjegjshmëria. Ne japim përparësi performancës duke ndërtuar uebsajte të shpejta, që përgjigjen dhe të fokusuara në konvertim të mbështetura nga të dhënat dhe rezultatet e botës reale. Bashkëpunimi është në thelbin e mënyrës se si punojmë; vizioni dhe qëllimet tuaja udhëheqin çdo vendim që marrim. Dhe mbi të gjitha, ne vlerësojmë cilësinë — pa shkurtesa, pa kompromise, vetëm punë për të cilën jemi krenarë të qëndrojmë pas.",
        "about.stats.projects" => "Projekte",
        "about.stats.clients" => "Vlerësimi i Klientit",
        "about.stats.growth" => "Rritje Mesatare",
        "about.stats.experience" => "Vite Përvojë",
        "portfolio.title" => "Puna Jonë",
        "portfolio.subtitle" => "Zbuloni projektet tona të web-eve mahnitëse dhe përvojave dixhitale që kanë transformuar bizneset dhe kanë magjepsur audienca në mbarë botën.",
        "portfolio.ecommerce.title" => "Rritja e E-commerce",
        "portfolio.ecommerce.description" => "Rritëm trafikun organik me 300% për një shitës mode përmes optimizimit gjithëpërfshirës të fjalëve kyçe dhe përmirësimeve teknike SEO.",
        "portfolio.local.title" => "Dominimi i Biznesit Lokal",
        "portfolio.local.description" => "Ndihmoi një zinxhir restorantesh të arrijë renditjen #1 lokale në 15 qytete, duke rezultuar në rritje 250% të trafikut të këmbësorëve.",
        "portfolio.saas.title" => "Gjenerimi i Udhëheqjes SaaS",
        "portfolio.saas.description" => "Gjeneroi 500+ udhëheqje të kualifikuara mujore për një kompani software B2B përmes marketingut të përmbajtjes dhe strategjisë SEO.",
        "portfolio.healthcare.title" => "Autoriteti i Kujdesit Shëndetësor",
        "portfolio.healthcare.description" => "Vendosi një praktikë mjekësore si autoriteti kryesor në specialitetin e tyre, duke rritur pyetjet e pacientëve me 400%.",
        "portfolio.viewProject" => "Shiko Projektin",
        "portfolio.exploreProject" => "Eksploro Projektin",
        "portfolio.startProject" => "Fillo Projektin Tënd",
        "testimonials.title" => "Çfarë Thonë Klientët Tanë",
        "testimonials.subtitle" => "Rezultate nga biznese që na besuan suksesin e tyre.",
        "testimonials.client1.name" => "Sarah Johnson",
        "testimonials.client1.role" => "Drejtore Marketingu, TechFlow Solutions",
        "testimonials.client1.content" => "Puna me këtë ekip transformoi plotësisht prezencën tonë online. Trafiku ynë organik u rrit me 400% në vetëm 6 muaj, dhe tani jemi të renditur #1 për fjalët tona kyçe më të rëndësishme.",
        "testimonials.client2.name" => "Michael Chen",
        "testimonials.client2.role" => "CEO, GreenLeaf Organics",
        "testimonials.client2.content" => "ROI nga puna e tyre SEO ka qenë e pabesueshme. Kemi parë një rritje 300% në udhëheqje të kualifikuara dhe të ardhurat tona janë rritur me 250% vit pas viti.",
        "testimonials.client3.name" => "Emily Rodriguez",
        "testimonials.client3.role" => "Themeluesja, Urban Wellness Studio",
        "testimonials.client3.content" => "Ekspertiza e tyre në SEO lokal na ndihmoi të dominojmë tregun tonë. Shkuam nga faqja 3 në renditje konsistente #1, dhe rezervimet tona u rritën me 180%.",
        "contact.title" => "Gati të Rritni Biznesin Tuaj?",
        "contact.subtitle" => "Le të diskutojmë se si mund t'ju ndihmojmë të arrini qëllimet tuaja SEO dhe të drejtoni rritje të qëndrueshme",
        "contact.form.name" => "Emri i Plotë",
        "contact.form.email" => "Adresa e Email-it",
        "contact.form.company" => "Emri i Kompanisë",
        "contact.form.message" => "Na tregoni për projektin tuaj",
        "contact.form.submit" => "Dërgo Mesazhin",
        "contact.info.title" => "Kontaktoni",
        "contact.info.description" => "Gati të çoni SEO-në tuaj në nivelin tjetër? Kontaktoni sot për një konsultim falas.",
        "contact.info.email" => "hello@seoexperts.com",
        "contact.info.phone" => "+1 (555) 123-4567",
        "contact.info.address" => "123 Digital Avenue, Tech City, TC 12345",
        "footer.description" => "Transformimi i bizneseve përmes SEO strategjik dhe përsosmërisë së marketingut dixhital.",
        "footer.quickLinks" => "Lidhje të Shpejta",
        "footer.services" => "Shërbimet",
        "footer.services.seo" => "Optimizimi SEO",
        "footer.services.content" => "Marketingu i Përmbajtjes",
        "footer.services.local" => "SEO Lokale",
        "footer.services.technical" => "SEO Teknike",
        "footer.contact" => "Informacioni i Kontaktit",
        "footer.rights" => "Të gjitha të drejtat e rezervuara.",
        _ => return None,
    };

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete_in_every_language() {
        for language in Language::ALL {
            for &key in KEYS {
                let value = translate(language, key);
                assert_ne!(
                    value,
                    key,
                    "key {key} is missing from the {} table",
                    language.code()
                );
            }
        }
    }

    #[test]
    fn switching_language_switches_every_lookup_deterministically() {
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_eq!(translate(Language::Al, "nav.home"), "Kryefaqja");
        assert_eq!(translate(Language::En, "nav.home"), "Home");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        assert_eq!(translate(Language::En, "nav.missing"), "nav.missing");
        assert_eq!(translate(Language::Al, "nav.missing"), "nav.missing");
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn unsupported_code_is_rejected() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
