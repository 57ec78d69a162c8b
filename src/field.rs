
use std::fmt::Debug;

use crate::Binary;

bitflags! {
    /// 头部字段的附加标记
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// 敏感数据, 编码时必须使用从不索引的表示方式,
        /// 解码时表示对端以该方式传输, 转发时需原样保留
        const SENSITIVE = 0x1;
    }
}

impl FieldFlags {
    pub fn zero() -> FieldFlags {
        FieldFlags::default()
    }

    pub fn is_sensitive(&self) -> bool {
        self.contains(FieldFlags::SENSITIVE)
    }
}

impl Default for FieldFlags {
    fn default() -> FieldFlags {
        FieldFlags::empty()
    }
}

/// 一个名值对, 名字与值均视作不透明的字节序列
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Binary,
    pub value: Binary,
    pub flags: FieldFlags,
}

impl Field {
    pub fn new(name: Binary, value: Binary) -> Field {
        Field {
            name,
            value,
            flags: FieldFlags::zero(),
        }
    }

    pub fn sensitive(name: Binary, value: Binary) -> Field {
        Field {
            name,
            value,
            flags: FieldFlags::SENSITIVE,
        }
    }

    /// 该字段计入动态表时的抽象大小
    pub fn table_size(&self) -> usize {
        self.name.len() + self.value.len() + crate::HEADER_ENTRY_OVERHEAD
    }
}

impl Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            String::from_utf8_lossy(&self.name),
            String::from_utf8_lossy(&self.value)
        )
    }
}
