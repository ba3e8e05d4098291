use crate::domain::Language;

/// Every user-visible string of the UI, for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub main_title: &'static str,
    pub main_subtitle: &'static str,
    pub topic_placeholder: &'static str,
    pub loading_text: &'static str,
    pub error_text: &'static str,
    pub empty_topic: &'static str,
    pub pros_title: &'static str,
    pub cons_title: &'static str,
    pub no_pros: &'static str,
    pub no_cons: &'static str,
    pub compare_title: &'static str,
    pub compare_footer: &'static str,
    pub shopping_link_text: &'static str,
    pub footer_text: &'static str,
}

pub static INDONESIAN: Translations = Translations {
    main_title: "Generator Pro & Kontra",
    main_subtitle: "Dapatkan analisis keuntungan dan kerugian instan untuk topik apa pun.",
    topic_placeholder: "Masukkan topik, contoh: 'Beli mobil listrik'",
    loading_text: "Sedang membuat analisis...",
    error_text: "Maaf, terjadi kesalahan. Silakan coba lagi.",
    empty_topic: "Topik tidak boleh kosong.",
    pros_title: "Pro",
    cons_title: "Kontra",
    no_pros: "Tidak ada pro yang ditemukan.",
    no_cons: "Tidak ada kontra yang ditemukan.",
    compare_title: "Bandingkan Harga",
    compare_footer: "Temukan lebih banyak penawaran dan penjual.",
    shopping_link_text: "Lihat di Google Shopping",
    footer_text: "© 2025 ProKontra AI. Ditenagai oleh Gemini.",
};

pub static ENGLISH: Translations = Translations {
    main_title: "Pro & Con Generator",
    main_subtitle: "Get instant pro and con analysis for any topic.",
    topic_placeholder: "Enter a topic, e.g., 'Buy an electric car'",
    loading_text: "Generating analysis...",
    error_text: "Sorry, an error occurred. Please try again.",
    empty_topic: "Topic cannot be empty.",
    pros_title: "Pros",
    cons_title: "Cons",
    no_pros: "No pros found.",
    no_cons: "No cons found.",
    compare_title: "Compare Prices",
    compare_footer: "Find more offers and sellers.",
    shopping_link_text: "See on Google Shopping",
    footer_text: "© 2025 ProContra AI. Powered by Gemini.",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Indonesian => &INDONESIAN,
        Language::English => &ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_has_its_own_table() {
        assert_eq!(translations(Language::English).pros_title, "Pros");
        assert_eq!(translations(Language::Indonesian).pros_title, "Pro");
        assert_ne!(
            translations(Language::English),
            translations(Language::Indonesian)
        );
    }
}
