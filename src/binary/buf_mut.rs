
/// 只写的字节流, 编码端输出数据的抽象
pub trait BufMut {
    /// 写入一段数据, 返回写入的字节数
    fn put_slice(&mut self, src: &[u8]) -> usize;

    /// 写入单个字节
    fn put_u8(&mut self, n: u8) {
        self.put_slice(&[n]);
    }

    /// 重复写入同一个字节
    fn put_bytes(&mut self, val: u8, cnt: usize) {
        for _ in 0..cnt {
            self.put_u8(val);
        }
    }
}

impl BufMut for Vec<u8> {
    #[inline]
    fn put_slice(&mut self, src: &[u8]) -> usize {
        self.extend_from_slice(src);
        src.len()
    }

    #[inline]
    fn put_u8(&mut self, n: u8) {
        self.push(n);
    }
}
