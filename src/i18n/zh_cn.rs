//! 中文翻译

use super::Translations;

pub static ZH_CN: Translations = Translations {
    app_name: "InsightSnap",

    hero_title1: "以极简主义",
    hero_title2: "重塑微学习",
    hero_subtitle: "一分钟，两次点击，三张卡 - 让复杂概念一目了然",
    hero_tagline: "你的好奇，知识即现",

    input_placeholder: "探索什么？(例如：博弈论、摄影构图)",

    tags: ["斯多葛哲学", "红酒品鉴", "Web3 入门", "极简生活"],

    loading_steps: ["构建知识架构...", "萃取核心概念...", "设计交互体验..."],

    generate_error: "生成课程失败，请重试。",
    mind_map_error: "思维导图生成失败，请检查 API Key 权限。",

    recent_explore: "最近探索",
    knowledge_points: "个知识点",
    quiz: "个测验",

    empty_title: "灵感待命",
    empty_subtitle1: "输入关键词",
    empty_subtitle2: "开启你的微型知识之旅",

    chapter: "第 {n} 章",

    quiz_header: "知识验收",
    correct_answer: "回答正确",
    wrong_answer: "再想想",
    explanation: "解析",
    generate_mind_map: "生成思维导图卡片",
    generating_mind_map: "正在绘制思维导图...",
    knowledge_crystal: "知识结晶",
    save_to_local: "保存到本地",
    saved: "已保存",
    restart: "重新开始",

    api_key_not_set: "GEMINI_API_KEY 未设置！\n\n\
        1. 获取 API Key: https://aistudio.google.com/apikey\n\
        2. export GEMINI_API_KEY=你的密钥\n\
        3. 重新运行 insightsnap",
};
