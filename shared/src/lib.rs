pub mod style;

/// Logo bitmap shown next to the site name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
    /// Ask the browser to fetch the image ahead of lower-priority resources.
    pub priority: bool,
}

/// Fixed branding literals rendered by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandConfig {
    pub site_url: &'static str,
    pub site_name: &'static str,
    pub logo: LogoImage,
}

impl BrandConfig {
    pub const ZEMELAH: BrandConfig = BrandConfig {
        site_url: "https://www.zemelah.online/",
        site_name: "Умный Земелах",
        logo: LogoImage {
            src: "/zemelah-logo.png",
            alt: "Zemelah Logo",
            width: 40,
            height: 40,
            priority: true,
        },
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_to_zemelah_site() {
        let brand = BrandConfig::ZEMELAH;
        assert_eq!(brand.site_url, "https://www.zemelah.online/");
        assert_eq!(brand.site_name, "Умный Земелах");
    }

    #[test]
    fn logo_is_square_and_prioritised() {
        let logo = BrandConfig::ZEMELAH.logo;
        assert_eq!(logo.src, "/zemelah-logo.png");
        assert_eq!(logo.alt, "Zemelah Logo");
        assert_eq!((logo.width, logo.height), (40, 40));
        assert!(logo.priority);
    }
}
