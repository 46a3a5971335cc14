//! Top-level domain lookup.
//!
//! URL candidates found by the scanner only become entities when their
//! rightmost domain label (or a prefix of it, for mixed-script input) is
//! a registered TLD. The table covers the generic TLDs, the country-code
//! TLDs, and the internationalized TLDs the platform recognizes.

use std::collections::HashSet;
use std::sync::LazyLock;

static GENERIC_TLDS: &[&str] = &[
    "academy", "aero", "agency", "app", "art", "asia", "audio", "bar", "best", "bid", "bike",
    "bio", "biz", "blog", "build", "builders", "buzz", "cab", "cafe", "cam", "camera", "camp",
    "capital", "careers", "cash", "cat", "center", "ceo", "chat", "cheap", "city", "cloud",
    "club", "codes", "coffee", "com", "community", "company", "computer", "cool", "coop",
    "date", "dating", "deals", "design", "dev", "digital", "directory", "download", "edu",
    "education", "email", "energy", "engineering", "enterprises", "equipment", "estate",
    "events", "exchange", "expert", "exposed", "express", "fans", "farm", "fashion",
    "finance", "financial", "fit", "fitness", "florist", "foundation", "fun", "fund",
    "gallery", "game", "games", "gift", "gives", "glass", "global", "gov", "graphics",
    "group", "guide", "guru", "help", "holdings", "holiday", "host", "house", "icu", "info",
    "ink", "institute", "int", "international", "jobs", "kim", "kitchen", "land", "legal",
    "life", "lighting", "limo", "link", "live", "loan", "lol", "love", "ltd", "management",
    "market", "marketing", "media", "men", "menu", "mil", "mobi", "moe", "money", "museum",
    "name", "net", "network", "news", "ninja", "one", "online", "ooo", "org", "page",
    "partners", "parts", "party", "photo", "photography", "photos", "pics", "pictures",
    "pink", "plumbing", "plus", "post", "press", "pro", "productions", "pub", "recipes",
    "red", "rentals", "repair", "report", "rocks", "run", "sale", "school", "science",
    "services", "sexy", "shoes", "shop", "show", "singles", "site", "social", "software",
    "solar", "solutions", "space", "store", "stream", "studio", "style", "support",
    "supplies", "supply", "systems", "tattoo", "tax", "team", "tech", "technology", "tel",
    "tienda", "tips", "today", "tools", "top", "tours", "town", "toys", "trade", "training",
    "travel", "tube", "uno", "vacations", "ventures", "viajes", "video", "villas", "vip",
    "vision", "voyage", "watch", "webcam", "website", "wiki", "win", "work", "works",
    "world", "wtf", "xxx", "xyz", "zone",
];

static COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl",
    "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do",
    "dz", "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu",
    "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq",
    "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr",
    "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma",
    "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt",
    "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
    "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps",
    "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
    "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy", "sz",
    "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
    "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
    "ws", "ye", "yt", "za", "zm", "zw",
];

static IDN_TLDS: &[&str] = &[
    "한국", "닷컴", "닷넷", "삼성", "みんな", "コム", "世界", "中国", "中國", "台湾", "台灣",
    "新加坡", "香港", "公司", "网络", "网站", "移动", "中文网", "我爱你", "ไทย", "рф", "бг",
    "бел", "срб", "укр", "мкд", "қаз", "ελ", "ευ", "мон", "مصر", "السعودية", "الاردن",
    "المغرب", "امارات", "ایران", "عمان", "قطر", "موقع", "شبكة", "بازار", "كوم", "भारत",
    "कॉम", "नेट", "संगठन", "இந்தியா", "இலங்கை", "சிங்கப்பூர்",
];

static TLD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    GENERIC_TLDS
        .iter()
        .chain(COUNTRY_TLDS)
        .chain(IDN_TLDS)
        .copied()
        .collect()
});

/// Whether `tld` (already lowercased) is a recognized top-level domain.
pub(crate) fn is_valid_tld(tld: &str) -> bool {
    TLD_SET.contains(tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_tlds() {
        for tld in ["com", "net", "org", "co", "jp", "tv", "io", "museum"] {
            assert!(is_valid_tld(tld), "{} should be a valid TLD", tld);
        }
    }

    #[test]
    fn test_idn_tlds() {
        assert!(is_valid_tld("한국"));
        assert!(is_valid_tld("みんな"));
    }

    #[test]
    fn test_rejected() {
        assert!(!is_valid_tld("comx"));
        assert!(!is_valid_tld(""));
        assert!(!is_valid_tld("notatld"));
    }
}
