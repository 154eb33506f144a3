//! Smart Assistance → MobilServ layout tables.
//!
//! Addresses on the left of each move are Smart Assistance export columns,
//! addresses on the right are MobilServ template columns.

/// Sample and asset metadata.
pub(super) const SAMPLE_MOVES: &[(&str, &str)] = &[
    ("A", "W"), ("Y", "B"), ("H", "C"), ("U", "E"), ("X", "F"), ("Z", "J"),
    ("V", "L"), ("W", "O"), ("E", "AA"), ("F", "AB"), ("C", "K"), ("D", "AH"),
    ("G", "AC"), ("I", "BB"), ("J", "BC"), ("K", "BD"), ("L", "BE"), ("M", "BF"),
    ("N", "BG"), ("O", "I"), ("B", "R"),
];

/// Wear metals, additive elements, contaminants and ISO code.
pub(super) const ELEMENT_MOVES: &[(&str, &str)] = &[
    ("IO", "FW"), ("MI", "CC"), ("AJ", "CG"), ("FK", "CY"), ("BV", "DA"),
    ("IE", "DS"), ("OZ", "GT"), ("MK", "FS"), ("JQ", "ES"), ("JJ", "EM"),
    ("HK", "GJ"), ("OB", "GH"), ("OG", "EQ"), ("MM", "EE"), ("PD", "GX"),
    ("BI", "CK"), ("BD", "CM"), ("BM", "CO"), ("BL", "CQ"), ("JE", "EI"),
    ("JF", "EK"), ("HQ", "FA"), ("PO", "HN"), ("BZ", "FK"), ("FB", "FM"),
    ("FC", "FO"), ("FA", "FQ"),
];

/// Oxidation, nitration, TAN/TBN, soot, fuel dilution, water and viscosity.
pub(super) const ANALYSIS_MOVES: &[(&str, &str)] = &[
    ("KB", "EW"), ("JR", "EU"), ("JU", "GN"), ("IY", "GP"), ("JV", "GR"),
    ("IG", "GL"), ("GO", "DY"), ("AE", "HH"), ("CS", "HJ"), ("EF", "PI"),
    ("PG", "GZ"), ("CE", "EO"), ("PC", "GV"), ("AD", "HD"), ("PH", "HB"),
];

pub(super) const INTEGER_COLUMNS: &[&str] = &[
    "BB", "BD", "BF", "CC", "CG", "CK", "CM", "CO", "CQ", "CY", "DA", "DS", "EE", "EI", "EK",
    "EM", "EQ", "ES", "EW", "FA", "FM", "FO", "FQ", "FS", "FW", "GH", "GJ", "GT", "GX", "HN",
];

pub(super) const DECIMAL_COLUMNS: &[&str] = &["DY", "GL", "GN", "GP", "GR", "GZ", "HB", "HH", "HJ"];

pub(super) const DATE_COLUMNS: &[&str] = &["Date Reported", "Date Sampled", "Date Registered", "Date Received"];

pub(super) const REPORT_STATUS: &str = "Report Status";
pub(super) const SAMPLE_STATUS: &str = "Sample Status";

/// MobilServ template header row, column A first.
pub(super) const HEADERS: &[&str] = &[
    "Sample Status",
    "Report Status",
    "Date Reported",
    "Asset ID",
    "Unit ID",
    "Unit Description",
    "Asset Class",
    "Position",
    "Tested Lubricant",
    "Service Level",
    "Sample Bottle ID",
    "Manufacturer",
    "Alt Manufacturer",
    "Model",
    "Alt Model",
    "Model Year",
    "Serial Number",
    "Account Name",
    "Account ID",
    "Oil Rating",
    "Contamination Rating",
    "Equipment Rating",
    "Parent Account Name",
    "Parent Account ID",
    "ERP Account Number",
    "Days Since Sampled",
    "Date Sampled",
    "Date Registered",
    "Date Received",
    "Country",
    "Laboratory",
    "Business Lines",
    "Fully Qualified",
    "LIMS Sample ID",
    "Schedule",
    "Tested Lubricant ID",
    "Registered Lubricant",
    "Registered Lubricant ID",
    "Zone",
    "Work ID",
    "Sampler",
    "IMO No",
    "Service Type",
    "Component Type",
    "Fuel Type",
    "RPM",
    "Cycles",
    "Pressure",
    "kW Rating",
    "Cylinder Number",
    "Target PC 4",
    "Target PC 6",
    "Target PC 14",
    "Equipment Age",
    "Equipment UOM",
    "Oil Age",
    "Oil Age UOM",
    "Makeup Volume",
    "MakeUp Volume UOM",
    "Oil Changed",
    "Filter Changed",
    "Oil Temp In",
    "Oil Temp Out",
    "Oil Temp UOM",
    "Coolant Temp In",
    "Coolant Temp Out",
    "Coolant Temp UOM",
    "Reservoir Temp",
    "Reservoir Temp UOM",
    "Total Engine Hours",
    "Hrs. Since Last Overhaul",
    "Oil Service Hours",
    "Used Oil Volume",
    "Used Oil Volume UOM",
    "Oil Used in Last 24Hrs",
    "Oil Used in Last 24Hrs UOM",
    "Sulphur %",
    "Engine Power at Sampling",
    "Date Landed",
    "Port Landed",
    "Ag (Silver)",
    "RESULT_Ag",
    "Air Release @50 (min)",
    "RESULT_Air Release @50 (min)",
    "Al (Aluminum)",
    "RESULT_Al",
    "Appearance",
    "RESULT_Appearance",
    "B (Boron)",
    "RESULT_ B",
    "Ba (Barium)",
    "RESULT_Ba",
    "Ca (Calcium)",
    "RESULT_Ca",
    "Cd (Cadmium)",
    "RESULT_Cd",
    "Cl (Chlorine ppm - Xray)",
    "RESULT_Cl (Chlorine ppm - Xray)",
    "Compatibility",
    "RESULT_Compatibility",
    "Coolant Indicator",
    "RESULT_Coolant Indicator",
    "Cr (Chromium)",
    "RESULT_Cr",
    "Cu (Copper)",
    "RESULT_Cu",
    "DAC(%Asphalt.)",
    "RESULT_DAC(%Asphalt.)",
    "Demul@54C  (min)",
    "RESULT_Demul@54C  (min)",
    "Demul@54C (min)",
    "RESULT_Demul@54C (min)",
    "Demul@54C (Oil/Water/Emul/Time)",
    "RESULT_Demul@54C (Oil/Water/Emul/Time)",
    "Demulsibility @54C (time-min)",
    "RESULT_Demulsibility @54C (time-min)",
    "Demulsibility @54C (oil)",
    "RESULT_Demulsibility @54C (oil)",
    "Demulsibility @54C (water)",
    "RESULT_Demulsibility @54C (water)",
    "Demulsibility @54C (emulsion)",
    "RESULT_Demulsibility @54C (emulsion)",
    "Fe (Iron)",
    "RESULT_Fe (Iron)",
    "Foam Seq 1 - stability (ml)",
    "RESULT_Foam Seq 1 - stability (ml)",
    "Foam Seq 1 - tendency (ml)",
    "RESULT_Foam Seq 1 - tendency (ml)",
    "Fuel Dilut. (Vol%)",
    "RESULT_Fuel Dilut. (Vol%)",
    "Initial pH",
    "RESULT_Initial pH",
    "Insolubles 5u",
    "RESULT_Insolubles 5u",
    "K (Potassium)",
    "RESULT_K",
    "MCR",
    "RESULT_MCR",
    "Mg (Magnesium)",
    "RESULT_Mg",
    "Mn (Manganese)",
    "RESULT_Mn (Manganese)",
    "Mo (Molybdenum)",
    "RESULT_Mo",
    "MPC delta E",
    "RESULT_MPC delta E",
    "Na (Sodium)",
    "RESULT_Na",
    "Ni (Nickel)",
    "RESULT_Ni",
    "Nitration (Ab/cm)",
    "RESULT_Nitration (Ab/cm)",
    "Oxidation (Ab/cm)",
    "RESULT_Oxidation (Ab/cm)",
    "P  (Phosphorus)",
    "RESULT_P  (Phosphorus)",
    "P (Phosphorus)",
    "RESULT_P (Phosphorus)",
    "ISO Code (4/6/14)",
    "RESULT_ISO Code (4/6/14)",
    "Particle Count  >4um",
    "RESULT_Particle Count  >4um",
    "Particle Count  >6um",
    "RESULT_Particle Count  >6um",
    "Particle Count>14um",
    "RESULT_Particle Count>14um",
    "Diluted ISO Code (4/6/14)",
    "RESULT_Diluted ISO Code (4/6/14)",
    "Particle Count (Diluted) >4um",
    "RESULT_Particle Count (Diluted) >4um",
    "Particle Count (Diluted) >6um",
    "RESULT_Particle Count (Diluted) >6um",
    "Particle Count (Diluted) >14um",
    "RESULT_Particle Count (Diluted) >14um",
    "Pb (Lead)",
    "RESULT_Pb",
    "PM Flash Pt.(°C)",
    "RESULT_PM Flash Pt.(°C)",
    "PQ Index",
    "RESULT_PQ Index",
    "RESULT_Product",
    "RPVOT (Min)",
    "RESULT_RPVOT (Min)",
    "RULER-Amine (% vs new)",
    "RESULT_RULER-Amine (% vs new)",
    "RULER-Phenol (% vs new)",
    "RESULT_RULER-Phenol (% vs new)",
    "SAE Viscosity Grade",
    "RESULT_SAE Viscosity Grade",
    "Si (Silicon)",
    "RESULT_Si",
    "Sn (Tin)",
    "RESULT_Sn",
    "Soot (Wt%)",
    "RESULT_Soot (Wt%)",
    "TAN (mg KOH/g)",
    "RESULT_TAN (mg KOH/g)",
    "TBN (mg KOH/g)",
    "RESULT_TBN (mg KOH/g) 2",
    "TBN (mg KOH/g)",
    "RESULT_TBN (mg KOH/g) 2",
    "Ti (Titanium)",
    "RESULT_Ti",
    "UC Rating",
    "RESULT_UC Rating",
    "V (Vanadium)",
    "RESULT_V",
    "Visc@100C (cSt)",
    "RESULT_Visc@100C (cSt)",
    "Visc@40C (cSt)",
    "RESULT_Visc@40C (cSt)",
    "Water (Hot Plate)",
    "RESULT_Water (Hot Plate)",
    "Water (Vol %)",
    "RESULT_Water (Vol%)",
    "Water (Vol%)",
    "RESULT_Water (Vol%) 2",
    "Water (Vol.%)",
    "RESULT_Water (Vol%) 3",
    "Water Free est.",
    "RESULT_Water Free est.",
    "Zn (Zinc)",
    "RESULT_Zn",
    "Zn (Zinc) 2",
    "RESULT_Zn 2",
    "Soot (Wt%)- No Ref",
    "RESULT_Soot (Wt%)- No Ref",
    "Oxidation (Abs/cm)- no Ref",
    "RESULT_Oxidation (Abs/cm)- no Ref",
    "Nitration (Abs/cm)- no Ref",
    "RESULT_Nitration (Abs/cm)- no Ref",
    "Water (Abs/cm)- no Ref",
    "RESULT_Water (Abs/cm) - no Ref",
    "Aluminum - GR",
    "RESULT_Aluminum - GR",
    "Antimony - gr",
    "RESULT_Antimony - gr",
    "Appearance - gr",
    "RESULT_Appearance - gr",
    "Barium - GR",
    "RESULT_Barium - GR",
    "Boron - GR",
    "RESULT_Boron - GR",
    "Cadmium - gr",
    "RESULT_Cadmium - gr",
    "Calcium - GR",
    "RESULT_Calcium - GR",
    "Chromium - gr",
    "RESULT_Chromium - gr",
    "Copper - GR",
    "RESULT_Copper - GR",
    "IR Correlation - gr",
    "RESULT_IR Correlation - gr",
    "Ferrous Debris - gr",
    "RESULT_Ferrous Debris - gr",
    "Stress Index - Gr",
    "RESULT_Stress Index - Gr",
    "Grease Thief Video",
    "RESULT_Grease Thief Video",
    "Iron - GR",
    "RESULT_Iron - GR",
    "Lead - gr",
    "RESULT_Lead - gr",
    "Magnesium - GR",
    "RESULT_Magnesium - GR",
    "Manganese - gr",
    "RESULT_Manganese - gr",
    "Molybdenum -gr",
    "RESULT_Molybdenum -gr",
    "Nickel -gr",
    "RESULT_Nickel -gr",
    "Phosphorus - GR",
    "RESULT_Phosphorus - GR",
    "Potassium - Gr",
    "RESULT_Potassium - Gr",
    "Silicon - gr",
    "RESULT_Silicon - gr",
    "Silver - Grease",
    "RESULT_Silver - Grease",
    "Sodium - Gr",
    "RESULT_Sodium - Gr",
    "Tin - gr",
    "RESULT_Tin - gr",
    "Titanium - gr",
    "RESULT_Titanium - gr",
    "Vanadium - gr",
    "RESULT_Vanadium - gr",
    "Water - Gr",
    "RESULT_Water - Gr",
    "Zinc - gr",
    "RESULT_Zinc - gr",
    "Fuel Dilution - INDO",
    "RESULT_Fuel Dilution - INDO",
    "TBN - INDO",
    "RESULT_TBN - INDO",
    "Soot - INDO",
    "RESULT_Soot - INDO",
    "Water - INDO",
    "RESULT_Water - INDO",
    "Oxidation - INDO",
    "RESULT_Oxidation - INDO",
    "Nitration - INDO",
    "RESULT_Nitration - INDO",
    "Boron",
    "RESULT_Boron",
    "Barium",
    "RESULT_Barium",
    "Calcium",
    "RESULT_Calcium",
    "Magnesium",
    "RESULT_Magnesium",
    "Lithium -gr",
    "RESULT_Lithium -gr",
    "Color -gr",
    "RESULT_Color -gr",
    "Chlorine",
    "RESULT_Chlorine",
    "Lithium",
    "RESULT_Lithium",
    "Antimony",
    "RESULT_Antimony",
    "Sulfur",
    "RESULT_Sulfur",
    "Insolubles",
    "RESULT_Insolubles",
    "Aluminum - gr - ICP",
    "RESULT_Aluminum - gr - ICP",
    "Antimony - gr- ICP",
    "RESULT_Antimony - gr- ICP",
    "Barium - gr - ICP",
    "RESULT_Barium - gr - ICP",
    "Boron - gr - ICP",
    "RESULT_Boron - gr - ICP",
    "Cadmium - gr - ICP",
    "RESULT_Cadmium - gr - ICP",
    "Calcium - gr - ICP",
    "RESULT_Calcium - gr - ICP",
    "Chromium - gr - ICP",
    "RESULT_Chromium - gr - ICP",
    "Copper - gr - ICP",
    "RESULT_Copper - gr - ICP",
    "Iron - gr - ICP",
    "RESULT_Iron - gr - ICP",
    "Lead - gr - ICP",
    "RESULT_Lead - gr - ICP",
    "Lithium - gr - ICP",
    "RESULT_Lithium - gr - ICP",
    "Magnesium - gr - ICP",
    "RESULT_Magnesium - gr - ICP",
    "Manganese - gr - ICP",
    "RESULT_Manganese - gr - ICP",
    "Molybdneum - gr - ICP",
    "RESULT_Molybdneum - gr - ICP",
    "Nickel - gr - ICP",
    "RESULT_Nickel - gr - ICP",
    "Phosphorus - gr - ICP",
    "RESULT_Phosphorus - gr - ICP",
    "Potassium - gr - ICP",
    "RESULT_Potassium - gr - ICP",
    "Silicon - gr - ICP",
    "RESULT_Silicon - gr - ICP",
    "Silver - Grease ICP",
    "RESULT_Silver - Grease ICP",
    "Sodium - gr - ICP",
    "RESULT_Sodium - gr - ICP",
    "Tin - gr - ICP",
    "RESULT_Tin - gr - ICP",
    "Titanium - gr - ICP",
    "RESULT_Titanium - gr - ICP",
    "Vanadium - gr - ICP",
    "RESULT_Vanadium - gr - ICP",
    "Zinc - gr - ICP",
    "RESULT_Zinc - gr - ICP",
    "Water (Vol%) - KF - 3P",
    "RESULT_Water (Vol%) - KF - 3P",
    "Water - E2412",
    "RESULT_Water - E2412",
    "Sulfur by xray",
    "RESULT_Sulfur by xray",
    "Viscosity at 100C",
    "RESULT_Viscosity at 100C",
    "Viscosity at 40C",
    "RESULT_Viscosity at 40C",
    "Blotter test",
    "RESULT_Blotter test",
    "TrendAnalysis",
    "Flashpoint D3828",
    "RESULT_Flashpoint D3828",
    "Foam Seq 2 tendency",
    "RESULT_Foam Seq 2 tendency",
    "Foam_Seq 2 stability",
    "RESULT_Foam Seq 2 stability",
    "Foam Seq 3 tendency",
    "RESULT_Foam Seq 3 tendency",
    "Foam Seq 3 stability",
    "RESULT_Foam Seq 3 stability",
    "Dielectric breakdown",
    "RESULT_Dielectric breakdown",
    "Serial Number ID",
    "RESULT_Serial Number ID",
    "Software Version",
    "RESULT_Software Version",
    "Sulfation abs/0.1mm",
    "RESULT_Sulfation abs/0.1mm",
    "Antiwear %",
    "RESULT_Antiwear %",
    "Total Fe < 100um ppm",
    "RESULT_Total Fe < 100um ppm",
    "Fe Wear Severity Index",
    "RESULT_Fe Wear Severity Index",
    "Large Fe ppm",
    "RESULT_Large Fe ppm",
    "Non-Metallic > 20 um",
    "RESULT_Non-Metallic > 20 um",
    "NAS particles 5-15um",
    "RESULT_NAS particles 5-15um",
    "NAS particles 15-25um",
    "RESULT_NAS particles 15-25um",
    "NAS particles 25-50um",
    "RESULT_NAS particles 25-50um",
    "NAS particles 50-100um",
    "RESULT_NAS particles 50-100um",
    "NAS particles > 100um",
    "RESULT_NAS particles > 100um",
    "Glycol %",
    "RESULT_Glycol %",
    "Blotter Spot C-Index",
    "RESULT_Blotter Spot C-Index",
    "Blotter Spot Diameter",
    "RESULT_Blotter Spot Diameter",
    "Blotter Spot Dispersancy",
    "RESULT_Blotter Spot Dispersancy",
    "Blotter Spot Opacity",
    "RESULT_Blotter Spot Opacity",
    "Blotter Spot Note",
    "RESULT_Blotter Spot Note",
];
