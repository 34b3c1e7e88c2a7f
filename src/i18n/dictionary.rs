use crate::i18n::Locale;

/// Static copy for one display language.
///
/// Mirrors the sections of the landing page; every supported locale has a
/// complete dictionary, so lookups never fall back mid-page.
pub struct Dictionary {
    pub meta: Meta,
    pub hero: Hero,
    pub features: Features,
    pub email_cta: EmailCta,
    pub testimonial: Testimonial,
    pub footer: Footer,
    pub blog: Blog,
    pub privacy: Privacy,
}

pub struct Meta {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub email_placeholder: &'static str,
    pub cta_button: &'static str,
    pub privacy_text: &'static str,
}

pub struct Features {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub list: &'static [FeatureItem],
}

pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct EmailCta {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email_placeholder: &'static str,
    pub cta_button: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub already_subscribed: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub struct Footer {
    pub description: &'static str,
    pub blog: &'static str,
    pub privacy: &'static str,
    pub copyright: &'static str,
}

pub struct Blog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub back_to_home: &'static str,
    pub coming_soon_title: &'static str,
    pub coming_soon_description: &'static str,
    pub coming_soon_cta: &'static str,
}

pub struct Privacy {
    pub title: &'static str,
    pub body: &'static str,
}

pub fn get_dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
        Locale::Zh => &ZH,
        Locale::Ko => &KO,
    }
}

static EN: Dictionary = Dictionary {
    meta: Meta {
        title: "Kanbun - Master the JLPT with Confidence",
        description: "The intelligent learning platform to ace your Japanese exam. \
            Prepare effectively with adaptive quizzes and personalized tracking.",
    },
    hero: Hero {
        badge: "Launching soon",
        title: "Pass the JLPT",
        title_highlight: "with confidence",
        subtitle: "Adaptive quizzes, smart reviews and personalized tracking, \
            from N5 all the way to N1.",
        email_placeholder: "Your email address",
        cta_button: "Join the waitlist",
        privacy_text: "No spam, ever. One email when we launch.",
    },
    features: Features {
        title: "Everything you need to pass",
        subtitle: "Built around how the JLPT actually tests you.",
        list: &[
            FeatureItem {
                title: "Adaptive quizzes",
                description: "Questions that adjust to your level and focus on your weak points.",
            },
            FeatureItem {
                title: "All five levels",
                description: "Structured tracks for N5, N4, N3, N2 and N1.",
            },
            FeatureItem {
                title: "Smart reviews",
                description: "Spaced repetition for kanji and vocabulary you keep missing.",
            },
            FeatureItem {
                title: "Progress tracking",
                description: "See exactly how ready you are before exam day.",
            },
        ],
    },
    email_cta: EmailCta {
        title: "Be first in line",
        subtitle: "Join the waitlist and get early access when we launch.",
        email_placeholder: "Your email address",
        cta_button: "Notify me",
        success_message: "You're on the list! We'll let you know when we launch.",
        error_message: "Something went wrong. Please try again.",
        already_subscribed: "This email address is already on the waitlist.",
    },
    testimonial: Testimonial {
        quote: "I failed N3 twice before studying with a structured plan. \
            This is the tool I wish I had from the start.",
        name: "Aiko M.",
        role: "Beta tester, passed N3",
    },
    footer: Footer {
        description: "The intelligent way to prepare for the JLPT.",
        blog: "Blog",
        privacy: "Privacy",
        copyright: "© 2025 Kanbun. All rights reserved.",
    },
    blog: Blog {
        title: "Blog",
        subtitle: "JLPT tips, study guides and product updates.",
        back_to_home: "Back to home",
        coming_soon_title: "Articles coming soon",
        coming_soon_description: "We're writing our first study guides. Join the \
            waitlist and we'll tell you as soon as they're up.",
        coming_soon_cta: "Back to the waitlist",
    },
    privacy: Privacy {
        title: "Privacy policy",
        body: "We only store the email address you give us, your preferred \
            language, and basic request metadata. We use it for a single \
            purpose: telling you when Kanbun launches. Write to us at \
            hello@kanbun.co to have your address removed at any time.",
    },
};

static FR: Dictionary = Dictionary {
    meta: Meta {
        title: "Kanbun - Maîtrisez le JLPT avec confiance",
        description: "La plateforme d'apprentissage intelligente pour réussir votre examen \
            de japonais. Préparez-vous efficacement avec des quiz adaptatifs et un suivi \
            personnalisé.",
    },
    hero: Hero {
        badge: "Lancement imminent",
        title: "Réussissez le JLPT",
        title_highlight: "en toute confiance",
        subtitle: "Quiz adaptatifs, révisions intelligentes et suivi personnalisé, \
            du N5 jusqu'au N1.",
        email_placeholder: "Votre adresse email",
        cta_button: "Rejoindre la liste d'attente",
        privacy_text: "Pas de spam, jamais. Un seul email au lancement.",
    },
    features: Features {
        title: "Tout ce qu'il faut pour réussir",
        subtitle: "Conçu autour de la manière dont le JLPT vous évalue réellement.",
        list: &[
            FeatureItem {
                title: "Quiz adaptatifs",
                description: "Des questions qui s'ajustent à votre niveau et ciblent vos lacunes.",
            },
            FeatureItem {
                title: "Les cinq niveaux",
                description: "Des parcours structurés pour le N5, N4, N3, N2 et N1.",
            },
            FeatureItem {
                title: "Révisions intelligentes",
                description: "Répétition espacée pour les kanji et le vocabulaire qui vous échappent.",
            },
            FeatureItem {
                title: "Suivi de progression",
                description: "Sachez exactement où vous en êtes avant le jour de l'examen.",
            },
        ],
    },
    email_cta: EmailCta {
        title: "Soyez les premiers informés",
        subtitle: "Rejoignez la liste d'attente et obtenez un accès anticipé au lancement.",
        email_placeholder: "Votre adresse email",
        cta_button: "Prévenez-moi",
        success_message: "Inscription réussie ! Nous vous tiendrons informé du lancement.",
        error_message: "Une erreur est survenue. Veuillez réessayer.",
        already_subscribed: "Cet email est déjà inscrit sur la liste d'attente.",
    },
    testimonial: Testimonial {
        quote: "J'ai échoué deux fois au N3 avant d'étudier avec un plan structuré. \
            C'est l'outil que j'aurais voulu avoir dès le début.",
        name: "Aiko M.",
        role: "Bêta-testeuse, N3 obtenu",
    },
    footer: Footer {
        description: "La manière intelligente de préparer le JLPT.",
        blog: "Blog",
        privacy: "Confidentialité",
        copyright: "© 2025 Kanbun. Tous droits réservés.",
    },
    blog: Blog {
        title: "Blog",
        subtitle: "Conseils JLPT, guides d'étude et nouvelles du produit.",
        back_to_home: "Retour à l'accueil",
        coming_soon_title: "Articles à venir",
        coming_soon_description: "Nous rédigeons nos premiers guides d'étude. \
            Rejoignez la liste d'attente et nous vous préviendrons dès leur \
            publication.",
        coming_soon_cta: "Retour à la liste d'attente",
    },
    privacy: Privacy {
        title: "Politique de confidentialité",
        body: "Nous ne conservons que l'adresse email que vous nous confiez, votre \
            langue préférée et quelques métadonnées de requête. Nous les utilisons \
            dans un seul but : vous prévenir du lancement de Kanbun. Écrivez-nous à \
            hello@kanbun.co pour faire supprimer votre adresse à tout moment.",
    },
};

static ZH: Dictionary = Dictionary {
    meta: Meta {
        title: "Kanbun - 自信掌握 JLPT",
        description: "智能学习平台，助您顺利通过日语能力考试。通过自适应测验和个性化跟踪高效备考。",
    },
    hero: Hero {
        badge: "即将上线",
        title: "通过 JLPT",
        title_highlight: "满怀信心",
        subtitle: "自适应测验、智能复习和个性化跟踪，从 N5 一直到 N1。",
        email_placeholder: "您的电子邮箱",
        cta_button: "加入候补名单",
        privacy_text: "绝不发送垃圾邮件。上线时只发一封邮件。",
    },
    features: Features {
        title: "通关所需的一切",
        subtitle: "围绕 JLPT 的真实考查方式打造。",
        list: &[
            FeatureItem {
                title: "自适应测验",
                description: "题目随您的水平调整，专攻薄弱环节。",
            },
            FeatureItem {
                title: "覆盖五个级别",
                description: "为 N5、N4、N3、N2 和 N1 提供结构化学习路径。",
            },
            FeatureItem {
                title: "智能复习",
                description: "针对反复出错的汉字和词汇进行间隔重复。",
            },
            FeatureItem {
                title: "进度跟踪",
                description: "考试前清楚了解自己的准备程度。",
            },
        ],
    },
    email_cta: EmailCta {
        title: "抢先体验",
        subtitle: "加入候补名单，上线时获得抢先使用资格。",
        email_placeholder: "您的电子邮箱",
        cta_button: "通知我",
        success_message: "报名成功！上线时我们会通知您。",
        error_message: "出现错误，请重试。",
        already_subscribed: "该邮箱已在候补名单中。",
    },
    testimonial: Testimonial {
        quote: "在按计划学习之前我两次没能通过 N3。这正是我当初希望拥有的工具。",
        name: "Aiko M.",
        role: "内测用户，已通过 N3",
    },
    footer: Footer {
        description: "备考 JLPT 的智能方式。",
        blog: "博客",
        privacy: "隐私政策",
        copyright: "© 2025 Kanbun. 保留所有权利。",
    },
    blog: Blog {
        title: "博客",
        subtitle: "JLPT 备考技巧、学习指南与产品动态。",
        back_to_home: "返回首页",
        coming_soon_title: "文章即将上线",
        coming_soon_description: "我们正在撰写第一批学习指南。加入候补名单，发布时我们会通知您。",
        coming_soon_cta: "返回候补名单",
    },
    privacy: Privacy {
        title: "隐私政策",
        body: "我们只保存您提供的电子邮箱、偏好语言和基本请求元数据，\
            仅用于一个目的：在 Kanbun 上线时通知您。您可以随时发邮件至 \
            hello@kanbun.co 要求删除您的地址。",
    },
};

static KO: Dictionary = Dictionary {
    meta: Meta {
        title: "Kanbun - 자신감 있게 JLPT 마스터하기",
        description: "일본어 시험을 성공적으로 준비할 수 있는 지능형 학습 플랫폼. \
            적응형 퀴즈와 맞춤형 추적으로 효율적으로 준비하세요.",
    },
    hero: Hero {
        badge: "곧 출시",
        title: "JLPT 합격",
        title_highlight: "자신 있게",
        subtitle: "적응형 퀴즈, 스마트 복습, 맞춤형 추적으로 N5부터 N1까지.",
        email_placeholder: "이메일 주소",
        cta_button: "대기자 명단 등록",
        privacy_text: "스팸은 절대 없습니다. 출시 시 메일 한 통만 보냅니다.",
    },
    features: Features {
        title: "합격에 필요한 모든 것",
        subtitle: "JLPT가 실제로 평가하는 방식에 맞춰 설계했습니다.",
        list: &[
            FeatureItem {
                title: "적응형 퀴즈",
                description: "실력에 맞춰 조정되고 약점을 집중 공략하는 문제.",
            },
            FeatureItem {
                title: "다섯 레벨 전체",
                description: "N5, N4, N3, N2, N1을 위한 체계적인 학습 과정.",
            },
            FeatureItem {
                title: "스마트 복습",
                description: "자꾸 틀리는 한자와 어휘를 위한 간격 반복 학습.",
            },
            FeatureItem {
                title: "진도 추적",
                description: "시험일 전에 준비 상태를 정확히 확인하세요.",
            },
        ],
    },
    email_cta: EmailCta {
        title: "가장 먼저 만나보세요",
        subtitle: "대기자 명단에 등록하고 출시 시 먼저 이용해 보세요.",
        email_placeholder: "이메일 주소",
        cta_button: "알림 받기",
        success_message: "등록 완료! 출시되면 알려드리겠습니다.",
        error_message: "오류가 발생했습니다. 다시 시도해 주세요.",
        already_subscribed: "이미 대기자 명단에 등록된 이메일입니다.",
    },
    testimonial: Testimonial {
        quote: "체계적인 계획으로 공부하기 전에는 N3에 두 번 떨어졌습니다. \
            처음부터 갖고 싶었던 바로 그 도구입니다.",
        name: "Aiko M.",
        role: "베타 테스터, N3 합격",
    },
    footer: Footer {
        description: "JLPT를 준비하는 지능적인 방법.",
        blog: "블로그",
        privacy: "개인정보 처리방침",
        copyright: "© 2025 Kanbun. All rights reserved.",
    },
    blog: Blog {
        title: "블로그",
        subtitle: "JLPT 공부 팁, 학습 가이드, 제품 소식.",
        back_to_home: "홈으로 돌아가기",
        coming_soon_title: "곧 게시될 글",
        coming_soon_description: "첫 학습 가이드를 준비하고 있습니다. 대기자 명단에 \
            등록하시면 게시되는 대로 알려드립니다.",
        coming_soon_cta: "대기자 명단으로 돌아가기",
    },
    privacy: Privacy {
        title: "개인정보 처리방침",
        body: "저희는 제공해 주신 이메일 주소, 선호 언어, 기본 요청 메타데이터만 \
            저장하며, Kanbun 출시를 알려드리는 단 하나의 목적에만 사용합니다. \
            언제든지 hello@kanbun.co 로 연락하시면 주소를 삭제해 드립니다.",
    },
};
