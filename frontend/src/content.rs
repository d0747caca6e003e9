//! Copy for every section of the page. Nothing here changes at runtime.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinkingStep {
    pub num: &'static str,
    pub en: &'static str,
    pub jp: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerTier {
    Surface,
    Structure,
    Essence,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLayer {
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub tier: LayerTier,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStudy {
    pub label: &'static str,
    pub category: &'static str,
    pub headline: &'static str,
    pub lead: &'static str,
    pub body: &'static str,
    pub scope: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    /// Image sits left of the text on wide screens.
    pub image_first: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowStep {
    pub title: &'static str,
    pub sub: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreMethod {
    pub title: &'static str,
    pub jp: &'static str,
    pub desc: &'static str,
}

pub const HERO_HEADLINE: [&str; 2] = ["ひとりで悩む時間をゼロに。", "正解へ導く思考整理パートナー"];

pub const HERO_VERTICAL: [&str; 2] = [
    "言葉にならない想いを編集し、",
    "ジャイアントキリングの設計図を描く。",
];

pub const HERO_LEAD: [&str; 3] = [
    "単なる施策提案ではなく、",
    "「目的の明確化」「価値の整理」「導線設計」「顧客理解」を軸に、",
    "戦略から実務まで一貫して支援します。",
];

pub const STRUCTURE_WORDS: [&str; 3] = ["Chaos", "Order", "Design"];

pub const PHILOSOPHY_TITLE: [&str; 2] = ["混沌を整理し、", "再設計する。"];

pub const PHILOSOPHY_OPENING: [&str; 3] = [
    "「想い」だけでは、ビジネスは動きません。",
    "多くの現場で起きているのは、情報の氾濫と、導線の不在です。",
    "素晴らしいビジョンがありながら、複雑さに溺れてしまっている。",
];

pub const PHILOSOPHY_QUOTE: [&str; 4] = [
    "私が提供するのは、徹底的な「整理」と「設計」です。",
    "絡まり合った課題を因数分解し（整理）、",
    "あるべき場所に配置し直し（構造化）、",
    "人が自然と動く流れを作る（設計）。",
];

pub const PHILOSOPHY_CLOSING: [&str; 3] = [
    "それは、ビジネスの基礎工事のようなものです。",
    "地味かもしれません。しかし、構造なき熱狂は脆い。",
    "強固な骨組みがあって初めて、あなたの想いは遠くまで届くのです。",
];

pub const METHODOLOGY_INTRO: &str = "私の仕事の中心には、状況や情報を「観察し、整理し、設計し、実行へつなげる」という一連の思考プロセスがあります。\
これは単なるフレームワークではなく、日々の実務・コミュニケーション・戦略設計のすべてに通底する“思考OS”として機能しています。";

pub static THINKING_STEPS: [ThinkingStep; 6] = [
    ThinkingStep { num: "01", en: "Insight", jp: "観察", desc: "データには表れない「行間」を読む。言語化されていない微細な違和感を捉える。" },
    ThinkingStep { num: "02", en: "Structure", jp: "整理", desc: "混在する事実と感情を分解する。カオスに秩序を与える構造化のプロセス。" },
    ThinkingStep { num: "03", en: "Meaning", jp: "解釈", desc: "事象の裏にある「意味」を定義する。なぜ、その問題が起きているのか。" },
    ThinkingStep { num: "04", en: "Design", jp: "設計", desc: "目的から逆算された導線を引く。どこを突けば、オセロが裏返るのか。" },
    ThinkingStep { num: "05", en: "Craft", jp: "実行", desc: "戦略を実務という現実へ落とし込む。泥臭く、かつ精密に。" },
    ThinkingStep { num: "06", en: "Review", jp: "改善", desc: "結果を構造として読み解く。次なる観察への回帰。" },
];

pub const DEPTH_TITLE: &str = "深度を、変える。";

pub const DEPTH_BACKDROP_URL: &str =
    "https://images.unsplash.com/photo-1541701494587-cb58502866ab?q=80&w=2070&auto=format&fit=crop";

pub static DEPTH_LAYERS: [DepthLayer; 3] = [
    DepthLayer {
        title: "Surface / 表面",
        body: &["「売上が落ちた」「SNSが伸びない」。多くの目はここに留まりますが、それは単なる現象に過ぎません。"],
        tier: LayerTier::Surface,
    },
    DepthLayer {
        title: "Structure / 構造",
        body: &["導線の断絶、ペルソナの矛盾。現象を引き起こしている「歪み」はこの層に潜んでいます。"],
        tier: LayerTier::Structure,
    },
    DepthLayer {
        title: "Essence / 本質",
        body: &[
            "私がアプローチするのは、ここです。",
            "顧客理解の欠如、あるいは、あなた自身の「譲れない想い」の言語化不足。",
            "最も深い場所にメスを入れない限り、真の解決は訪れません。",
        ],
        tier: LayerTier::Essence,
    },
];

pub static CASE_STUDIES: [CaseStudy; 2] = [
    CaseStudy {
        label: "LOG 01 : THE ARCHITECT",
        category: "工務店｜",
        headline: "世界観の調律と導線設計",
        lead: "「見られる」から「選ばれる」へ。",
        body: "強引な集客ではなく、入口から出口の統一感、自然な導線設計で「この会社で建てたい」となる共感性の高い出会いを設計しました。数値としての成約だけでなく、顧客と企業の幸福なマッチングを実現した事例です。",
        scope: "SCOPE: Branding / SNS Strategy / Line Marketing",
        image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
        image_alt: "Modern Japanese House Architecture",
        image_first: false,
    },
    CaseStudy {
        label: "LOG 02 : THE CLUB",
        category: "サッカークラブ｜",
        headline: "組織の背骨を通すリブランディング",
        lead: "入会率1.75倍という数字は、結果に過ぎません。",
        body: "ブランドの再設計により、競合との比較にならない「一本の揺るぎない軸」が通ったことで独自化に向け走り出しました。組織としてのアイデンティティが確立され、地域の信頼を勝ち取る基盤を創りました。",
        scope: "SCOPE: Rebranding / CX Design / Internal Identity",
        image_url: "https://images.unsplash.com/photo-1552667466-07770ae110d0?q=80&w=2070&auto=format&fit=crop",
        image_alt: "Soccer texture",
        image_first: true,
    },
];

pub static FLOW_STEPS: [FlowStep; 5] = [
    FlowStep { title: "Abstract", sub: "抽象的な想い", desc: "言語化されていない\n願望やビジョン" },
    FlowStep { title: "Verbalize", sub: "言語化", desc: "背景・動機を汲み取り\n定義する" },
    FlowStep { title: "Structure", sub: "構造化", desc: "優先順位をつけ\n戦略へ落とす" },
    FlowStep { title: "Design", sub: "導線設計", desc: "実務への接続と\nフロー構築" },
    FlowStep { title: "Execution", sub: "実行・成果", desc: "迷いのない\nアクションへ" },
];

pub static CORE_METHODS: [CoreMethod; 5] = [
    CoreMethod { title: "Purpose", jp: "目的の明確化", desc: "「なぜやるのか」「誰のためか」。プロジェクトの北極星を定義し、チームの判断軸を統一する。" },
    CoreMethod { title: "Customer", jp: "顧客理解", desc: "属性ではなく、行動・状況・判断基準を分析。「なぜその人が動くのか」という動機を特定する。" },
    CoreMethod { title: "Value", jp: "価値の言語化", desc: "機能的な強みだけでなく、その背景にある物語や必然性を整理し、選ばれる理由を作る。" },
    CoreMethod { title: "Journey", jp: "導線設計", desc: "認知から契約まで、顧客心理が自然に変化する「流れ」を設計。断絶のないスムーズな動線を作る。" },
    CoreMethod { title: "Verify", jp: "実行と検証", desc: "やりっ放しにしない。「なぜうまくいったか」を構造的に分析し、成果の再現性を高める。" },
];

pub const CONTACT_INVITATION: [&str; 2] = [
    "考え方を整え、「新しい視点」で描く、迷いのない地図。",
    "進めない原因を整理し、再設計する。",
];

pub const CONTACT_NOTE: [&str; 2] = [
    "まずは、まとまりのない言葉のままで構いません。",
    "そのカオスの中にこそ、次のジャイアントキリングの種が眠っています。",
];

pub const CONTACT_ANCHOR: &str = "#contact";

pub const COPYRIGHT: &str = "© 2024 The Architect of Meaning.";

/// Step counter shown above each flow step ("01", "02", ...).
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Splits a description on explicit line breaks.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}
