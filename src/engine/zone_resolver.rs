// ==========================================
// 保温参考与估算引擎 - 气候区解析器
// ==========================================
// 输入: ZIP(任意格式) 或 手选区号
// 输出: ZoneRecord;ZIP 前缀未收录返回 None(可恢复,由调用方转手选)
// ==========================================

use crate::domain::types::ZoneNumber;
use crate::domain::zone::{StateZones, ZoneRecord};
use crate::reference::ReferenceData;
use tracing::instrument;

/// 规范化后的 ZIP 长度
pub const ZIP_LENGTH: usize = 5;

/// 查表使用的前缀长度
pub const ZIP_PREFIX_LENGTH: usize = 3;

/// 去掉非数字字符后左侧补零到 5 位
///
/// 超过 5 位的输入(如 ZIP+4)保持原样,由前 3 位查表。
pub fn normalize_zip(zip: &str) -> String {
    let digits: String = zip.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{:0>width$}", digits, width = ZIP_LENGTH)
}

/// 去掉非数字字符后恰好 5 位
pub fn is_valid_zip(zip: &str) -> bool {
    zip.chars().filter(|c| c.is_ascii_digit()).count() == ZIP_LENGTH
}

// ==========================================
// ZoneResolver - 气候区解析器
// ==========================================
pub struct ZoneResolver<'a> {
    data: &'a ReferenceData,
}

impl<'a> ZoneResolver<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// ZIP → 气候区记录
    #[instrument(skip(self))]
    pub fn by_zip(&self, zip: &str) -> Option<&'a ZoneRecord> {
        let normalized = normalize_zip(zip);
        let prefix = &normalized[..ZIP_PREFIX_LENGTH];
        match self.data.zone_for_prefix(prefix) {
            Some(zone) => Some(self.data.zone(zone)),
            None => {
                tracing::debug!(prefix, "ZIP 前缀未收录");
                None
            }
        }
    }

    /// ZIP → 区号
    pub fn zone_number_by_zip(&self, zip: &str) -> Option<ZoneNumber> {
        self.by_zip(zip).map(ZoneRecord::number)
    }

    /// 区号 → 气候区记录(区号已由类型保证在 1..=8)
    pub fn by_number(&self, zone: ZoneNumber) -> &'a ZoneRecord {
        self.data.zone(zone)
    }

    /// 州代码 → 气候区分布
    pub fn state(&self, code: &str) -> Option<&'a StateZones> {
        self.data.state(code)
    }

    /// 全部气候区(1..=8)
    pub fn all(&self) -> &'a [ZoneRecord] {
        self.data.zones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::embedded;

    #[test]
    fn test_normalize_zip() {
        assert_eq!(normalize_zip("10001"), "10001");
        assert_eq!(normalize_zip(" 100-01 "), "10001");
        assert_eq!(normalize_zip("501"), "00501");
        assert_eq!(normalize_zip(""), "00000");
        assert_eq!(normalize_zip("60614-1234"), "606141234");
    }

    #[test]
    fn test_is_valid_zip() {
        assert!(is_valid_zip("10001"));
        assert!(is_valid_zip("100-01"));
        assert!(!is_valid_zip("1000"));
        assert!(!is_valid_zip("60614-1234"));
        assert!(!is_valid_zip("abcde"));
    }

    #[test]
    fn test_by_zip_known_prefixes() {
        let resolver = ZoneResolver::new(embedded());
        assert_eq!(resolver.zone_number_by_zip("10001").map(|z| z.get()), Some(4));
        assert_eq!(resolver.zone_number_by_zip("33101").map(|z| z.get()), Some(1));
        assert_eq!(resolver.zone_number_by_zip("60614").map(|z| z.get()), Some(5));
        assert_eq!(resolver.zone_number_by_zip("90210").map(|z| z.get()), Some(3));
    }

    #[test]
    fn test_by_zip_missing_prefix() {
        let resolver = ZoneResolver::new(embedded());
        assert!(resolver.by_zip("00000").is_none());
        assert!(resolver.by_zip("34001").is_none());
        assert!(resolver.by_zip("").is_none());
    }

    #[test]
    fn test_by_number_and_state() {
        let resolver = ZoneResolver::new(embedded());
        for zone in ZoneNumber::all() {
            assert_eq!(resolver.by_number(zone).number(), zone);
        }
        assert_eq!(resolver.all().len(), 8);
        assert!(resolver.state("tx").is_some());
        assert!(resolver.state("XX").is_none());
    }
}
