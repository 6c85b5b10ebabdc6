use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::layout::LayoutTemplate;

/// Longest slug used in generated file names, in characters.
pub const MAX_FILE_NAME_LEN: usize = 50;

const FALLBACK_FILE_STEM: &str = "article";

/// The user's listing data together with the layout it is rendered with.
///
/// The layout is owned, not shared, so an article stays self-describing when
/// exported and re-imported elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArticleData {
    pub title: String,
    pub subtitle: String,
    pub mobile_summary: String,
    /// Free text; the first four non-blank lines become footer segments.
    pub footer: String,
    /// Content per block id. Keys with no matching block are tolerated.
    pub block_contents: BTreeMap<String, String>,
    pub layout: LayoutTemplate,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Default for ArticleData {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleData {
    /// An empty article on the standard layout.
    pub fn new() -> Self {
        Self::with_layout(LayoutTemplate::standard())
    }

    pub fn with_layout(layout: LayoutTemplate) -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            subtitle: String::new(),
            mobile_summary: String::new(),
            footer: String::new(),
            block_contents: BTreeMap::new(),
            layout,
            created_at: now,
            modified_at: now,
        }
    }

    /// Content stored for `block_id`, or `""` when there is none.
    pub fn block_content(&self, block_id: &str) -> &str {
        self.block_contents
            .get(block_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_block_content(&mut self, block_id: impl Into<String>, content: impl Into<String>) {
        self.block_contents.insert(block_id.into(), content.into());
        self.modified_at = Utc::now();
    }

    pub fn clear_block_content(&mut self, block_id: &str) {
        self.block_contents.remove(block_id);
        self.modified_at = Utc::now();
    }

    /// Content keys that no block in the embedded layout refers to.
    pub fn unused_block_ids(&self) -> Vec<&str> {
        self.block_contents
            .keys()
            .filter(|id| self.layout.block(id).is_none())
            .map(String::as_str)
            .collect()
    }

    /// File name for exports, stamped with the local time.
    pub fn generate_file_name(&self, extension: &str) -> String {
        self.file_name_at(extension, Local::now().naive_local())
    }

    /// `<slug>_<yyyy-MM-dd_HHmm>.<extension>` for the given timestamp.
    pub fn file_name_at(&self, extension: &str, timestamp: NaiveDateTime) -> String {
        format!(
            "{}_{}.{}",
            file_stem(&self.title),
            timestamp.format("%Y-%m-%d_%H%M"),
            extension
        )
    }

    /// The standard layout filled with a realistic product.
    pub fn demo() -> Self {
        let mut article = Self::new();
        article.title = "CORSAIR iCUE LINK TITAN 360 RX RGB".to_string();
        article.subtitle = "AIO liquid cooler │ 360mm radiator │ CW-9061018-WW".to_string();
        article.mobile_summary = "Corsair iCUE LINK TITAN 360 RX RGB - premium AIO liquid cooler \
            with a 360mm radiator. FlowDrive pump with a quiet three-phase motor, 3x RX120 RGB \
            fans with 44 RGB LEDs. iCUE LINK for simple cable management. Compatible with Intel \
            LGA 1851/1700 and AMD AM5/AM4."
            .to_string();
        article.footer = "SKU: CW-9061018-WW\nColor: Black\nWarranty: 6 years".to_string();

        let contents = [
            (
                "img",
                "https://assets.corsair.com/image/upload/c_pad,q_85,h_1100,w_1100,f_auto/products/\
                 Liquid-Cooling/titan-rx-rgb/Gallery/CW-9061018-WW/CW-9061018-WW_01.webp",
            ),
            (
                "desc",
                "The **Corsair iCUE LINK TITAN 360 RX RGB** is a powerful all-in-one CPU liquid \
                 cooler that combines extreme cooling with whisper-quiet operation and striking \
                 RGB lighting.\n\n\
                 The in-house **FlowDrive cooling engine** with a three-phase motor delivers high \
                 flow at minimal noise. Three RX120 RGB fans with magnetic dome bearings push \
                 optimized airflow for first-class cooling.",
            ),
            (
                "highlights",
                "FlowDrive pump | Quiet three-phase motor for thermal efficiency\n\
                 3× RX120 RGB fans | 120mm fans with high airflow\n\
                 44 RGB LEDs | 20 on the pump + 8 per fan\n\
                 iCUE LINK | One cable, one port, simpler cable management\n\
                 XTM70 thermal paste | High-performance paste pre-applied\n\
                 6 year warranty | First-class support from Corsair",
            ),
            (
                "specs",
                "Radiator size | 360mm (396 × 120 × 27 mm)\n\
                 Fans | 3× 120mm RX120 RGB\n\
                 Fan speed | 300 – 2,100 RPM (±10%)\n\
                 Airflow | 10.4 – 73.5 CFM\n\
                 Noise level | 10 – 36 dBA\n\
                 Tube length | 450 mm\n\
                 Weight | 2,515 g",
            ),
            ("compat", "Intel | LGA 1851 │ LGA 1700\nAMD | AM5 │ AM4"),
            (
                "scope",
                "iCUE LINK TITAN 360 RX RGB liquid cooler\n\
                 3× iCUE LINK RX120 RGB fans (pre-installed)\n\
                 iCUE LINK System Hub\n\
                 Mounting hardware for Intel & AMD\n\
                 XTM70 thermal paste (pre-applied)\n\
                 Documentation",
            ),
        ];
        for (id, content) in contents {
            article.set_block_content(id, content);
        }
        article
    }
}

fn file_stem(title: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    static DASH_RUN: OnceLock<Regex> = OnceLock::new();

    if title.trim().is_empty() {
        return FALLBACK_FILE_STEM.to_string();
    }

    let non_word = NON_WORD.get_or_init(|| Regex::new(r"[^\w-]").expect("Invalid slug regex"));
    let dash_run = DASH_RUN.get_or_init(|| Regex::new(r"-+").expect("Invalid dash regex"));

    let replaced = non_word.replace_all(title, "-");
    let collapsed = dash_run.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');

    let capped: String = trimmed.chars().take(MAX_FILE_NAME_LEN).collect();
    let stem = capped.trim_end_matches('-');
    if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem.to_string()
    }
}
