use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash;
use std::ops::{Deref, Range};
use std::rc::Rc;

use super::Buf;

static EMPTY_ARRAY: &[u8] = &[];

/// 存储的来源, 静态引用或共享引用
#[derive(Clone)]
enum Storage {
    Static(&'static [u8]),
    Shared(Rc<Vec<u8>>),
}

/// 二进制的封装, 克隆仅增加引用计数, 不拷贝数据
///
/// 动态表的记录与解码输出的名值共用同一份存储, 记录被淘汰后
/// 只要还有输出在引用它, 数据就不会释放
#[derive(Clone)]
pub struct Binary {
    storage: Storage,
    // 游标值, 可以得出当前指向的位置
    cursor: usize,
    // 长度值, 还剩下多少的长度
    len: usize,
}

impl Binary {
    pub fn new() -> Binary {
        Binary::from_static(EMPTY_ARRAY)
    }

    pub fn from_static(val: &'static [u8]) -> Binary {
        Binary {
            storage: Storage::Static(val),
            cursor: 0,
            len: val.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// 获取引用的数量
    pub fn get_refs(&self) -> usize {
        match &self.storage {
            Storage::Static(_) => 0,
            Storage::Shared(rc) => Rc::strong_count(rc),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        let all = match &self.storage {
            Storage::Static(s) => s,
            Storage::Shared(rc) => &rc[..],
        };
        &all[self.cursor..self.cursor + self.len]
    }

    /// 克隆出指定范围的子分片, 与原对象共享同一份存储
    ///
    /// # Panics
    ///
    /// This function panics if the range is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Binary {
        assert!(range.start <= range.end && range.end <= self.len);
        let mut new = self.clone();
        new.cursor += range.start;
        new.len = range.end - range.start;
        new
    }

    pub fn copy_from_slice(data: &[u8]) -> Self {
        data.to_vec().into()
    }
}

impl Buf for Binary {
    fn remaining(&self) -> usize {
        self.len
    }

    fn chunk(&self) -> &[u8] {
        self.as_slice()
    }

    fn advance(&mut self, n: usize) {
        assert!(n <= self.len);
        self.cursor += n;
        self.len -= n;
    }
}

impl From<&'static str> for Binary {
    fn from(value: &'static str) -> Self {
        Binary::from_static(value.as_bytes())
    }
}

impl From<&'static [u8]> for Binary {
    fn from(value: &'static [u8]) -> Self {
        Binary::from_static(value)
    }
}

impl From<Vec<u8>> for Binary {
    fn from(value: Vec<u8>) -> Self {
        let len = value.len();
        Binary {
            storage: Storage::Shared(Rc::new(value)),
            cursor: 0,
            len,
        }
    }
}

impl Deref for Binary {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Binary {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Borrow<[u8]> for Binary {
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Debug for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binary")
            .field("cursor", &self.cursor)
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl hash::Hash for Binary {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        self.as_slice().hash(state);
    }
}

impl PartialEq for Binary {
    fn eq(&self, other: &Binary) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Binary {}

impl PartialEq<[u8]> for Binary {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Binary> for [u8] {
    fn eq(&self, other: &Binary) -> bool {
        *other == *self
    }
}

impl PartialEq<str> for Binary {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<Binary> for str {
    fn eq(&self, other: &Binary) -> bool {
        *other == *self
    }
}

impl PartialEq<Vec<u8>> for Binary {
    fn eq(&self, other: &Vec<u8>) -> bool {
        *self == other[..]
    }
}

impl PartialEq<Binary> for Vec<u8> {
    fn eq(&self, other: &Binary) -> bool {
        *other == *self
    }
}

impl<'a, T: ?Sized> PartialEq<&'a T> for Binary
where
    Binary: PartialEq<T>,
{
    fn eq(&self, other: &&'a T) -> bool {
        *self == **other
    }
}

impl Default for Binary {
    #[inline]
    fn default() -> Binary {
        Binary::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Binary, Buf};

    #[test]
    fn binary_refs() {
        {
            let s = Binary::from("aaaa");
            let s1 = s.clone();
            assert!(s1.get_refs() == 0);
            drop(s1);
            assert!(s.get_refs() == 0);
        }
        {
            let b = Binary::from(vec![1]);
            let b1 = b.clone();
            assert!(b1.get_refs() == 2);
            drop(b1);
            assert!(b.get_refs() == 1);
        }
    }

    #[test]
    fn binary_slice() {
        let b = Binary::from(b"custom-keycustom-value".to_vec());
        let name = b.slice(0..10);
        let value = b.slice(10..b.len());
        assert_eq!(name, "custom-key");
        assert_eq!(value, "custom-value");
        assert!(value.get_refs() >= 2);
        drop(b);
        assert_eq!(name, "custom-key");
    }

    #[test]
    fn binary_advance() {
        let mut b = Binary::from_static(b"hello");
        assert_eq!(b.get_next(), Some(b'h'));
        assert_eq!(b.remaining(), 4);
        assert_eq!(b.chunk(), b"ello");
    }
}
