//! Static reference data shared by every endpoint.
//!
//! Nothing here is ever mutated: the catalogs are compile-time constants, so
//! concurrent requests read them without any synchronisation.

use common::model::catalog::{ColumnCatalog, OptionalColumn};

/// Name of the single worksheet in every generated template.
pub const SHEET_NAME: &str = "顧客リスト";

/// Industries offered in the industry dropdown and by `GET /api/industries`.
pub const INDUSTRIES: [&str; 5] = ["IT", "製造", "金融", "不動産", "サービス"];

/// The 47 prefectures, in their conventional north-to-south order.
pub const REGIONS: [&str; 47] = [
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県", "茨城県", "栃木県", "群馬県",
    "埼玉県", "千葉県", "東京都", "神奈川県", "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県",
    "岐阜県", "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県", "奈良県", "和歌山県",
    "鳥取県", "島根県", "岡山県", "広島県", "山口県", "徳島県", "香川県", "愛媛県", "高知県", "福岡県",
    "佐賀県", "長崎県", "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// Header of the required column that carries the industry dropdown.
pub const INDUSTRY_HEADER: &str = "業種";

/// Headers every template starts with: corporate name, contact last name,
/// contact first name, phone number, industry.
pub const REQUIRED_HEADERS: [&str; 5] = [
    "顧客法人名",
    "担当者名（姓）",
    "担当者名（名）",
    "電話番号",
    INDUSTRY_HEADER,
];

/// Optional column key whose column carries the region dropdown.
pub const REGION_KEY: &str = "prefecture";

/// Optional column keys and the header text each one produces.
pub const OPTIONAL_COLUMNS: [(&str, &str); 6] = [
    (REGION_KEY, "県域"),
    ("address", "住所"),
    ("email", "メールアドレス"),
    ("inflow_date", "流入日"),
    ("inflow_source", "流入元"),
    ("list_name", "リスト名"),
];

/// Header text for an optional column key. Unknown keys are used verbatim.
pub fn optional_label(key: &str) -> &str {
    OPTIONAL_COLUMNS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

pub fn column_catalog() -> ColumnCatalog {
    ColumnCatalog {
        required: REQUIRED_HEADERS.iter().map(|h| h.to_string()).collect(),
        optional: OPTIONAL_COLUMNS
            .iter()
            .map(|(key, label)| OptionalColumn {
                key: key.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_header_is_the_fifth_required_column() {
        assert_eq!(
            REQUIRED_HEADERS.iter().position(|h| *h == INDUSTRY_HEADER),
            Some(4)
        );
    }

    #[test]
    fn known_keys_map_to_labels() {
        assert_eq!(optional_label("prefecture"), "県域");
        assert_eq!(optional_label("address"), "住所");
        assert_eq!(optional_label("email"), "メールアドレス");
        assert_eq!(optional_label("inflow_date"), "流入日");
        assert_eq!(optional_label("inflow_source"), "流入元");
        assert_eq!(optional_label("list_name"), "リスト名");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(optional_label("fax"), "fax");
        assert_eq!(optional_label(""), "");
    }

    #[test]
    fn catalogs_have_no_duplicates() {
        let mut regions = REGIONS.to_vec();
        regions.sort_unstable();
        regions.dedup();
        assert_eq!(regions.len(), 47);

        let mut industries = INDUSTRIES.to_vec();
        industries.sort_unstable();
        industries.dedup();
        assert_eq!(industries.len(), 5);
    }

    #[test]
    fn column_catalog_mirrors_constants() {
        let catalog = column_catalog();
        assert_eq!(catalog.required, REQUIRED_HEADERS);
        assert_eq!(catalog.optional.len(), OPTIONAL_COLUMNS.len());
        assert_eq!(catalog.optional[0].key, "prefecture");
        assert_eq!(catalog.optional[0].label, "県域");
    }
}
