// ==========================================
// 要求串展示文本测试
// ==========================================
// 测试目标: 英文/中文两种语言下的要求串与部位名展示
// 注意: locale 为进程级全局状态,本文件内测试串行化
// ==========================================


use insulation_advisor::engine::{format_location_label, format_requirement};
use insulation_advisor::i18n::set_locale;
use test_helpers::LOCALE_LOCK;

#[test]
fn test_requirement_display_en() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_locale("en");

    assert_eq!(format_requirement("NR"), "Not required");
    assert_eq!(format_requirement("R-30"), "R-30 cavity");
    assert_eq!(format_requirement("R-10ci"), "R-10 continuous");
    assert_eq!(
        format_requirement("R-13+5ci"),
        "R-13 cavity + R-5 continuous"
    );
    // 无法识别的要求串原样返回
    assert_eq!(format_requirement("see local code"), "see local code");
}

#[test]
fn test_requirement_display_zh() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_locale("zh-CN");

    assert_eq!(format_requirement("NR"), "无强制要求");
    assert_eq!(format_requirement("R-30"), "空腔 R-30");
    assert_eq!(
        format_requirement("R-20+5ci"),
        "空腔 R-20 + 连续保温 R-5"
    );

    set_locale("en");
}

#[test]
fn test_location_labels() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_locale("en");
    assert_eq!(format_location_label("ceiling_attic"), "Ceiling/Attic");
    assert_eq!(format_location_label("slab_edge"), "Slab Edge");
    assert_eq!(format_location_label("mystery_wall"), "mystery_wall");

    set_locale("zh-CN");
    assert_eq!(format_location_label("basement_wall"), "地下室墙体");
    assert_eq!(format_location_label("mystery_wall"), "mystery_wall");

    set_locale("en");
}

#[test]
fn test_requirement_rows_follow_locale() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let api = test_helpers::default_api();
    let zone = test_helpers::zone(1);

    set_locale("en");
    let en_rows = api.requirement_rows(zone);
    set_locale("zh-CN");
    let zh_rows = api.requirement_rows(zone);
    set_locale("en");

    assert_eq!(en_rows.len(), zh_rows.len());
    for (en, zh) in en_rows.iter().zip(&zh_rows) {
        assert_eq!(en.raw, zh.raw);
        assert_eq!(en.parsed, zh.parsed);
        assert_ne!(en.label, zh.label);
    }
    let basement = en_rows.iter().find(|r| r.label == "Basement Walls").unwrap();
    assert_eq!(basement.display, "Not required");
}
