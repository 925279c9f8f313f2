//! Product categories shown on the site.
//!
//! Only slugs, dictionary keys and English fallbacks live here; the
//! translated copy comes from the dictionaries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subcategory {
    pub slug: &'static str,
    pub title_key: &'static str,
    pub title: &'static str,
    pub description_key: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    /// Dictionary section holding the category page copy (e.g., "wood")
    pub section: &'static str,
    pub title_key: &'static str,
    pub title: &'static str,
    pub summary_key: &'static str,
    pub summary: &'static str,
    pub page_description: &'static str,
    pub badge: &'static str,
    pub subcategories: &'static [Subcategory],
}

macro_rules! sub {
    ($slug:literal, $key:literal, $title:literal, $section:literal, $desc_key:literal, $desc:literal) => {
        Subcategory {
            slug: $slug,
            title_key: concat!("navbar.subcategories.", $key),
            title: $title,
            description_key: concat!($section, ".", $desc_key),
            description: $desc,
        }
    };
}

static WOOD: [Subcategory; 9] = [
    sub!("cnc", "cncMachiningCenters", "CNC Machining Centers", "wood", "cncDescription", "Advanced CNC machines for precise wood processing"),
    sub!("beam-saws", "beamSaws", "Beam Saws", "wood", "beamSawsDescription", "High-performance panel cutting solutions"),
    sub!("edge-banders", "edgeBanders", "Edge Banders", "wood", "edgeBandersDescription", "Professional edge banding machines"),
    sub!("drilling", "drillingMachines", "Drilling Machines", "wood", "drillingDescription", "Precision drilling solutions for woodworking"),
    sub!("joinery", "joineryMachines", "Joinery Machines", "wood", "joineryDescription", "Quality machines for wood joinery"),
    sub!("sanders", "wideBeltSanders", "Wide Belt Sanders", "wood", "sandersDescription", "Industrial wide belt sanding machines"),
    sub!("hot-presses", "hotPresses", "Hot Presses", "wood", "hotPressesDescription", "Hot press machines for lamination"),
    sub!("veneer", "veneerMachines", "Veneer Machines", "wood", "veneerDescription", "Veneer processing equipment"),
    sub!("dust-collectors", "dustCollectors", "Dust Collectors", "wood", "dustCollectorsDescription", "Efficient dust collection systems"),
];

static METAL: [Subcategory; 4] = [
    sub!("laser", "fiberLaserCutting", "Fiber Laser Cutting", "metal", "laserDescription", "High-precision fiber laser cutting systems"),
    sub!("press-brake", "pressBrake", "Press Brake", "metal", "pressBrakeDescription", "CNC press brakes for accurate sheet bending"),
    sub!("shear", "shearMachine", "Shear Machine", "metal", "shearDescription", "Hydraulic shears for clean, straight cuts"),
    sub!("welding", "fiberLaserWelding", "Fiber Laser Welding", "metal", "weldingDescription", "Fast, clean fiber laser welding machines"),
];

static GLASS_ALUMINIUM: [Subcategory; 5] = [
    sub!("cnc", "cncMachiningCenters", "CNC Machining Centers", "glassAluminium", "cncDescription", "CNC centers for aluminium profile machining"),
    sub!("cutting-off", "cuttingOffMachines", "Cutting Off Machines", "glassAluminium", "cuttingOffDescription", "Precision cutting-off saws for profiles"),
    sub!("copy-router", "copyRouter", "Copy Router", "glassAluminium", "copyRouterDescription", "Copy routers for locks and handles"),
    sub!("end-milling", "endMilling", "End Milling", "glassAluminium", "endMillingDescription", "End milling machines for transom joints"),
    sub!("crimping", "crimpingMachines", "Crimping Machines", "glassAluminium", "crimpingDescription", "Corner crimping machines for frames"),
];

static AIR_COMPRESSOR: [Subcategory; 2] = [
    sub!("screw", "screwTypeCompressors", "Screw Type Compressors", "airCompressor", "screwDescription", "Energy-efficient rotary screw compressors"),
    sub!("piston", "pistonTypeCompressors", "Piston Type Compressors", "airCompressor", "pistonDescription", "Reliable piston compressors for workshops"),
];

static CATEGORIES: [Category; 4] = [
    Category {
        slug: "wood",
        section: "wood",
        title_key: "navbar.woodMachines",
        title: "Wood Working Machines",
        summary_key: "machinery.woodDescription",
        summary: "Complete solutions for wood processing and furniture production",
        page_description: "Explore our comprehensive range of wood processing machinery. From CNC machining centers to dust collection systems, we offer complete solutions for the woodworking industry.",
        badge: "Wood Machinery",
        subcategories: &WOOD,
    },
    Category {
        slug: "glass-aluminium",
        section: "glassAluminium",
        title_key: "navbar.glassAluminiumMachines",
        title: "Glass & Aluminium Machines",
        summary_key: "machinery.glassAluminiumDescription",
        summary: "Machinery for aluminium profiles, windows and glass processing",
        page_description: "Discover machinery for aluminium window, door and facade fabrication.",
        badge: "Glass & Aluminium Machinery",
        subcategories: &GLASS_ALUMINIUM,
    },
    Category {
        slug: "metal",
        section: "metal",
        title_key: "navbar.metalMachines",
        title: "Metal Working Machines",
        summary_key: "machinery.metalDescription",
        summary: "Cutting, bending and welding equipment for sheet metal",
        page_description: "Browse our metal working machinery, from fiber laser cutting to press brakes and welding.",
        badge: "Metal Machinery",
        subcategories: &METAL,
    },
    Category {
        slug: "air-compressor",
        section: "airCompressor",
        title_key: "navbar.airCompressors",
        title: "Air Compressors",
        summary_key: "machinery.airCompressorDescription",
        summary: "Industrial compressed air for every workshop",
        page_description: "Screw and piston compressors that keep your production line running.",
        badge: "Air Compressors",
        subcategories: &AIR_COMPRESSOR,
    },
];

/// All categories in navbar order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn find_category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

impl Category {
    /// Dictionary key inside this category's section (e.g., "wood.pageDescription").
    pub fn key(&self, name: &str) -> String {
        format!("{}.{}", self.section, name)
    }
}
