#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A supported UI language.
///
/// Exactly one language is active at any time (held in
/// [`crate::state::locale::LocaleState`]); it changes only through the
/// language selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Bn,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Bn,
    ];

    /// Wire code sent to the backend and used as the `<select>` value.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Bn => "bn",
        }
    }

    /// Parse a wire code back into a language.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "ta" => Some(Language::Ta),
            "te" => Some(Language::Te),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }

    /// Native-script label shown in the language selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Bn => "বাংলা",
        }
    }
}

/// A localizable text surface in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKey {
    /// Banner paragraph introducing the assistant's capabilities.
    WelcomeBanner,
    /// Greeting seeded as the first transcript message.
    Greeting,
    HeaderTitle,
    HeaderSubtitle,
    InputPlaceholder,
    SuggestionCrop,
    SuggestionWeather,
    SuggestionSoil,
    SuggestionPest,
    TagCrop,
    TagWeather,
    TagPest,
    FooterNotice,
    LogoutLabel,
}

impl TextKey {
    /// All keys, for coverage checks.
    pub const ALL: [TextKey; 14] = [
        TextKey::WelcomeBanner,
        TextKey::Greeting,
        TextKey::HeaderTitle,
        TextKey::HeaderSubtitle,
        TextKey::InputPlaceholder,
        TextKey::SuggestionCrop,
        TextKey::SuggestionWeather,
        TextKey::SuggestionSoil,
        TextKey::SuggestionPest,
        TextKey::TagCrop,
        TextKey::TagWeather,
        TextKey::TagPest,
        TextKey::FooterNotice,
        TextKey::LogoutLabel,
    ];
}

/// Topics behind the quick-suggestion buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionTopic {
    Crop,
    Weather,
    Soil,
    Pest,
}

impl SuggestionTopic {
    pub const ALL: [SuggestionTopic; 4] = [
        SuggestionTopic::Crop,
        SuggestionTopic::Weather,
        SuggestionTopic::Soil,
        SuggestionTopic::Pest,
    ];

    /// Key for the button label belonging to this topic.
    pub fn label_key(self) -> TextKey {
        match self {
            SuggestionTopic::Crop => TextKey::SuggestionCrop,
            SuggestionTopic::Weather => TextKey::SuggestionWeather,
            SuggestionTopic::Soil => TextKey::SuggestionSoil,
            SuggestionTopic::Pest => TextKey::SuggestionPest,
        }
    }
}

/// The greeting seeded into a fresh transcript.
pub fn greeting(language: Language) -> &'static str {
    lookup(TextKey::Greeting, language)
}

/// Canned question inserted and sent by a quick-suggestion click.
pub fn suggestion_prompt(topic: SuggestionTopic, language: Language) -> &'static str {
    match topic {
        SuggestionTopic::Crop => match language {
            Language::En => "Why are the leaves on my crop turning yellow?",
            Language::Hi => "मेरी फसल में पीले पत्ते आ रहे हैं",
            Language::Ta => "எனது பயற்றில் மஞ்சள் இலைகள் ஏன் வருகின்றன?",
            Language::Te => "నా పంటలో పసుపు ఆకులు ఎందుకు వస్తున్నాయి?",
            Language::Bn => "আমার ফসলের পাতা কেন হলুদ হয়ে যাচ্ছে?",
        },
        SuggestionTopic::Weather => match language {
            Language::En => "What is today's weather like?",
            Language::Hi => "आज का मौसम कैसा है?",
            Language::Ta => "இன்று வானிலை எப்படி?",
            Language::Te => "ఈ రోజు వాతావరణం ఎలా ఉంది?",
            Language::Bn => "আজকের আবহাওয়া কেমন?",
        },
        SuggestionTopic::Soil => match language {
            Language::En => "How to test the soil?",
            Language::Hi => "मिट्टी की जांच कैसे करें?",
            Language::Ta => "மண்ணை எவ்வாறு சோதிப்பது?",
            Language::Te => "నేల పరీక్ష ఎలా చేయాలి?",
            Language::Bn => "মাটি পরীক্ষা কিভাবে করবেন?",
        },
        SuggestionTopic::Pest => match language {
            Language::En => "How to protect from pests?",
            Language::Hi => "कीटों से कैसे बचाव?",
            Language::Ta => "பூச்சிகளிடமிருந்து எவ்வாறு பாதுகாப்பது?",
            Language::Te => "కీటకాల నుండి ఎలా రక్షించుకోవాలి?",
            Language::Bn => "পোকা থেকে কিভাবে সুরক্ষা পাবেন?",
        },
    }
}

/// Resolve a text surface for a language.
///
/// Pure lookup over static data. Both enums are matched exhaustively, so
/// every surface has a translation for every supported language.
pub fn lookup(key: TextKey, language: Language) -> &'static str {
    match key {
        TextKey::WelcomeBanner => match language {
            Language::En => {
                "Hello! I am your agricultural assistant. I can help you with crops, soil, weather, and pests."
            }
            Language::Hi => {
                "नमस्ते! मैं आपका कृषि सहायक हूँ। मैं फसलों, मिट्टी, मौसम और कीटों के बारे में आपकी मदद कर सकता हूँ।"
            }
            Language::Ta => {
                "ஹலோ! நான் உங்கள் விவசாய உதவியாளர். நான் பயள், மண், வானிலை மற்றும் பூச்சிகள் பற்றி உங்களுக்கு உதவ முடியும்."
            }
            Language::Te => {
                "హలో! నేను మీ వ్యవసాయ సహాయకుడిని. నేను పంటలు, నేల, వాతావరణం మరియు కీటకాల గురించి మిమ్మల్ని సహాయం చేయగలను."
            }
            Language::Bn => {
                "হ্যালো! আমি আপনার কৃষি সহায়ক। আমি ফসল, মাটি, আবহাওয়া এবং পোকামাকড় সম্পর্কে আপনাকে সাহায্য করতে পারি।"
            }
        },
        TextKey::Greeting => match language {
            Language::En => "Hello! I am your agricultural assistant. Please enter your question.",
            Language::Hi => "नमस्ते! मैं आपका कृषि सहायक हूँ। कृपया अपना प्रश्न दर्ज करें।",
            Language::Ta => "ஹலோ! நான் உங்கள் விவசாய உதவியாளர். உங்கள் கேள்வியை உள்ளிடவும்.",
            Language::Te => "హలో! నేను మీ వ్యవసాయ సహాయకుడిని. మీ ప్రశ్నను పంపండి.",
            Language::Bn => "হ্যালো! আমি আপনার কৃষি সহায়ক। আপনার প্রশ্ন লিখুন।",
        },
        TextKey::HeaderTitle => match language {
            Language::En => "AI Agricultural Expert",
            Language::Hi => "AI कृषि विशेषज्ञ",
            Language::Ta => "AI விவசாய நிபுணர்",
            Language::Te => "AI వ్యవసాయ నిపుణుడు",
            Language::Bn => "AI কৃষি বিশেষজ্ঞ",
        },
        TextKey::HeaderSubtitle => match language {
            Language::En => "🤖 AI Agricultural Expert | 🌍 Multi-Language Support",
            Language::Hi => "🤖 AI कृषि विशेषज्ञ | 🌍 बहुभाषा समर्थन",
            Language::Ta => "🤖 AI விவசாய நிபுணர் | 🌍 பல மொழி ஆதரவு",
            Language::Te => "🤖 AI వ్యవసాయ నిపుణుడు | 🌍 బహుభాషా మద్దతు",
            Language::Bn => "🤖 AI কৃষি বিশেষজ্ঞ | 🌍 বহুভাষিক সমর্থন",
        },
        TextKey::InputPlaceholder => match language {
            Language::En => {
                "🌾 Type your agricultural question here... (English/Hindi/Tamil/Telugu/Bengali)"
            }
            Language::Hi => "🌾 अपना कृषि प्रश्न यहाँ टाइप करें... (हिंदी/तमिल/तेलुगु में)",
            Language::Ta => {
                "🌾 உங்கள் விவசாய கேள்வியை இங்கே தட்டச்சு செய்க... (ஹிந்தி/தமிழ்/தெலுங்கு)"
            }
            Language::Te => "🌾 మీ వ్యవసాయ ప్రశ్నను ఇక్కడ టైప్ చేయండి... (హిందీ/తమిళం/తెలుగు)",
            Language::Bn => {
                "🌾 এখানে আপনার কৃষি প্রশ্ন টাইপ করুন... (ইংরেজি/হিন্দি/তামিল/তেলেগু/বাংলা)"
            }
        },
        TextKey::SuggestionCrop => match language {
            Language::En => "🌾 Crop Problem",
            Language::Hi => "🌾 फसल की समस्या",
            Language::Ta => "🌾 பயள் சிக்கல்",
            Language::Te => "🌾 పంట సమస్య",
            Language::Bn => "🌾 ফসল সমস্যা",
        },
        TextKey::SuggestionWeather => match language {
            Language::En => "☁️ Weather",
            Language::Hi => "☁️ मौसम",
            Language::Ta => "☁️ வானிலை",
            Language::Te => "☁️ వాతావరణం",
            Language::Bn => "☁️ আবহাওয়া",
        },
        TextKey::SuggestionSoil => match language {
            Language::En => "🌱 Soil",
            Language::Hi => "🌱 मिट्टी",
            Language::Ta => "🌱 மண்",
            Language::Te => "🌱 నేల",
            Language::Bn => "🌱 মাটি",
        },
        TextKey::SuggestionPest => match language {
            Language::En => "🐛 Pest Control",
            Language::Hi => "🐛 कीट नियंत्रण",
            Language::Ta => "🐛 பூச்சி கட்டுப்பாடு",
            Language::Te => "🐛 కీటకాల నియంత్రణ",
            Language::Bn => "🐛 পোকা দমন",
        },
        TextKey::TagCrop => match language {
            Language::En => "🌾 Crop",
            Language::Hi => "🌾 फसल",
            Language::Ta => "🌾 பயள்",
            Language::Te => "🌾 పంట",
            Language::Bn => "🌾 ফসল",
        },
        TextKey::TagWeather => match language {
            Language::En => "☁️ Weather",
            Language::Hi => "☁️ मौसम",
            Language::Ta => "☁️ வானிலை",
            Language::Te => "☁️ వాతావరణం",
            Language::Bn => "☁️ আবহাওয়া",
        },
        TextKey::TagPest => match language {
            Language::En => "🐛 Pest",
            Language::Hi => "🐛 कीट",
            Language::Ta => "🐛 பூச்சி",
            Language::Te => "🐛 కీటకం",
            Language::Bn => "🐛 পোকা",
        },
        TextKey::FooterNotice => match language {
            Language::En => {
                "🌾 Kisan Mitra is here to help with your farming | Verify important information"
            }
            Language::Hi => {
                "🌾 Kisan Mitra आपके खेतों की मदद करने के लिए यहाँ है | महत्वपूर्ण जानकारी की पुष्टि करें"
            }
            Language::Ta => {
                "🌾 Kisan Mitra உங்கள் விவசாயத்திற்கு உதவ இங்கே உள்ளது | முக்கியமான தகவல்களை சரிபார்க்கவும்"
            }
            Language::Te => {
                "🌾 Kisan Mitra మీ వ్యవసాయానికి సహాయం చేయడానికి ఇక్కడ ఉంది | ముఖ్యమైన సమాచారాన్ని ధృవీకరించండి"
            }
            Language::Bn => {
                "🌾 Kisan Mitra আপনার কৃষিকাজে সাহায্য করতে এখানে উপস্থিত | গুরুত্বপূর্ণ তথ্য যাচাই করুন"
            }
        },
        TextKey::LogoutLabel => match language {
            Language::En => "Logout",
            Language::Hi => "लॉगआउट",
            Language::Ta => "வெளியேறு",
            Language::Te => "లాగ్అవుట్",
            Language::Bn => "লগ আউট",
        },
    }
}
