
/// 只读的字节流, 解码端消费数据的抽象
pub trait Buf {
    /// 获取剩余数量
    fn remaining(&self) -> usize;

    /// 获取当前数据的切片引用
    fn chunk(&self) -> &[u8];

    /// 消耗掉多少字节的数据, 做指针偏移
    fn advance(&mut self, n: usize);

    /// 是否还有数据
    fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// 获取当前的值, 但不做任何偏移
    fn peek(&self) -> Option<u8> {
        if self.has_remaining() {
            Some(self.chunk()[0])
        } else {
            None
        }
    }

    /// 获取当前的值并将偏移值+1
    fn get_next(&mut self) -> Option<u8> {
        match self.peek() {
            Some(val) => {
                self.advance(1);
                Some(val)
            }
            None => None,
        }
    }

    /// Gets one byte from `self`, advancing the position.
    ///
    /// # Panics
    ///
    /// This function panics if there is no more remaining data in `self`.
    fn get_u8(&mut self) -> u8 {
        assert!(self.remaining() >= 1);
        let ret = self.chunk()[0];
        self.advance(1);
        ret
    }

    /// 拷贝数据 `self` into `dst`.
    ///
    /// # Panics
    ///
    /// This function panics if `self.remaining() < dst.len()`
    fn copy_to_slice(&mut self, dst: &mut [u8]) -> usize {
        assert!(self.remaining() >= dst.len());
        dst.copy_from_slice(&self.chunk()[..dst.len()]);
        self.advance(dst.len());
        dst.len()
    }
}

impl Buf for &[u8] {
    #[inline]
    fn remaining(&self) -> usize {
        self.len()
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        self
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        *self = &self[cnt..];
    }
}
