//! Provider and recipient registry
//!
//! The registry is fixed at startup and never mutated. Address strings
//! are stored verbatim; display normalization (pincode spacing, stray
//! space removal) happens at render time.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A service provider (lessor) appearing on invoices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Party {
    pub name: String,
    pub address: String,
    /// Permanent Account Number
    pub pan: String,
    /// GST registration number
    pub gst: String,
    /// Service Accounting Code
    pub sac: String,
    /// Description of the SAC
    pub description: String,
    /// Location where the service is provided
    pub location: String,
    pub state_code: String,
    pub state_name: String,
    /// Monthly rent prefilled in the form, overridable per invoice
    pub default_rent: f64,
}

/// The service recipient (lessee), the same on every invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    pub name: String,
    pub address_lines: Vec<String>,
    pub gstin: String,
}

const SAC_CODE: &str = "997212";
const SAC_DESCRIPTION: &str =
    "Rental or leasing services involving own or leased non-residential property";
const SERVICE_LOCATION: &str = "SULUR, COIMBATORE DIST., TAMIL NADU";
const STATE_CODE: &str = "33";
const STATE_NAME: &str = "Tamilnadu";

fn party(name: &str, address: &str, pan: &str, gst: &str, default_rent: f64) -> Party {
    Party {
        name: name.to_string(),
        address: address.to_string(),
        pan: pan.to_string(),
        gst: gst.to_string(),
        sac: SAC_CODE.to_string(),
        description: SAC_DESCRIPTION.to_string(),
        location: SERVICE_LOCATION.to_string(),
        state_code: STATE_CODE.to_string(),
        state_name: STATE_NAME.to_string(),
        default_rent,
    }
}

/// All known providers, in selection order
pub fn providers() -> &'static [Party] {
    static PROVIDERS: OnceLock<Vec<Party>> = OnceLock::new();
    PROVIDERS
        .get_or_init(|| {
            vec![
                party(
                    "S.N.PREMA",
                    "10. RAMS APARTMENT, 181.TTK ROAD, ALWARPET, CHENNAI - 600018",
                    "BXNPP2277D",
                    "33BXNPP2277D1ZD",
                    194494.00,
                ),
                party(
                    "S.N.Geetha",
                    "No.5, Third Main Road, Teesta Street, River View Housing Society, \
                     Manapakkam, Chennai - 600125",
                    "ADAPG2263N",
                    "33ADAPG2263N1ZQ",
                    194494.00,
                ),
                party(
                    "N.RAJENDRAN",
                    "No.15, Subramaniam Layout, Ramanathapuram, Coimbatore - 641045",
                    "BIFPR0499Q",
                    "33BIFPR0499Q1ZI",
                    129662.00,
                ),
            ]
        })
        .as_slice()
}

/// Look up a provider by its exact display name
pub fn provider_by_name(name: &str) -> Option<&'static Party> {
    providers().iter().find(|p| p.name == name)
}

/// The fixed recipient
pub fn recipient() -> &'static Recipient {
    static RECIPIENT: OnceLock<Recipient> = OnceLock::new();
    RECIPIENT.get_or_init(|| Recipient {
        name: "Reliance Projects and Property Management Services Ltd".to_string(),
        address_lines: vec![
            "89, A1 Tower, Dr Radhakrishnan Salai".to_string(),
            "Mylapore, Chennai - 600 004,".to_string(),
            "Tamilnadu".to_string(),
        ],
        gstin: "33AAJCR6636B1ZJ".to_string(),
    })
}
