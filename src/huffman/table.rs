//! RFC 7541 Appendix B 静态哈夫曼表, 由码表生成的查表数据
//! 解码采用状态机方式, 每次步进4bit

/// 当前状态可作为字符串的合法结束位置
pub const HUFF_ACCEPTED: u8 = 1;
/// 本次状态迁移产出一个符号
pub const HUFF_SYM: u8 = 1 << 1;
/// 遇到非法编码(EOS等), 解码必须终止
pub const HUFF_FAIL: u8 = 1 << 2;

/// 各符号对应的编码值与位长, 最后一位为EOS
pub static HUFF_SYM_TABLE: [(u32, u8); 257] = [
    (0x1ff8, 13), (0x7fffd8, 23), (0xfffffe2, 28), (0xfffffe3, 28),
    (0xfffffe4, 28), (0xfffffe5, 28), (0xfffffe6, 28), (0xfffffe7, 28),
    (0xfffffe8, 28), (0xffffea, 24), (0x3ffffffc, 30), (0xfffffe9, 28),
    (0xfffffea, 28), (0x3ffffffd, 30), (0xfffffeb, 28), (0xfffffec, 28),
    (0xfffffed, 28), (0xfffffee, 28), (0xfffffef, 28), (0xffffff0, 28),
    (0xffffff1, 28), (0xffffff2, 28), (0x3ffffffe, 30), (0xffffff3, 28),
    (0xffffff4, 28), (0xffffff5, 28), (0xffffff6, 28), (0xffffff7, 28),
    (0xffffff8, 28), (0xffffff9, 28), (0xffffffa, 28), (0xffffffb, 28),
    (0x14, 6), (0x3f8, 10), (0x3f9, 10), (0xffa, 12),
    (0x1ff9, 13), (0x15, 6), (0xf8, 8), (0x7fa, 11),
    (0x3fa, 10), (0x3fb, 10), (0xf9, 8), (0x7fb, 11),
    (0xfa, 8), (0x16, 6), (0x17, 6), (0x18, 6),
    (0x0, 5), (0x1, 5), (0x2, 5), (0x19, 6),
    (0x1a, 6), (0x1b, 6), (0x1c, 6), (0x1d, 6),
    (0x1e, 6), (0x1f, 6), (0x5c, 7), (0xfb, 8),
    (0x7ffc, 15), (0x20, 6), (0xffb, 12), (0x3fc, 10),
    (0x1ffa, 13), (0x21, 6), (0x5d, 7), (0x5e, 7),
    (0x5f, 7), (0x60, 7), (0x61, 7), (0x62, 7),
    (0x63, 7), (0x64, 7), (0x65, 7), (0x66, 7),
    (0x67, 7), (0x68, 7), (0x69, 7), (0x6a, 7),
    (0x6b, 7), (0x6c, 7), (0x6d, 7), (0x6e, 7),
    (0x6f, 7), (0x70, 7), (0x71, 7), (0x72, 7),
    (0xfc, 8), (0x73, 7), (0xfd, 8), (0x1ffb, 13),
    (0x7fff0, 19), (0x1ffc, 13), (0x3ffc, 14), (0x22, 6),
    (0x7ffd, 15), (0x3, 5), (0x23, 6), (0x4, 5),
    (0x24, 6), (0x5, 5), (0x25, 6), (0x26, 6),
    (0x27, 6), (0x6, 5), (0x74, 7), (0x75, 7),
    (0x28, 6), (0x29, 6), (0x2a, 6), (0x7, 5),
    (0x2b, 6), (0x76, 7), (0x2c, 6), (0x8, 5),
    (0x9, 5), (0x2d, 6), (0x77, 7), (0x78, 7),
    (0x79, 7), (0x7a, 7), (0x7b, 7), (0x7ffe, 15),
    (0x7fc, 11), (0x3ffd, 14), (0x1ffd, 13), (0xffffffc, 28),
    (0xfffe6, 20), (0x3fffd2, 22), (0xfffe7, 20), (0xfffe8, 20),
    (0x3fffd3, 22), (0x3fffd4, 22), (0x3fffd5, 22), (0x7fffd9, 23),
    (0x3fffd6, 22), (0x7fffda, 23), (0x7fffdb, 23), (0x7fffdc, 23),
    (0x7fffdd, 23), (0x7fffde, 23), (0xffffeb, 24), (0x7fffdf, 23),
    (0xffffec, 24), (0xffffed, 24), (0x3fffd7, 22), (0x7fffe0, 23),
    (0xffffee, 24), (0x7fffe1, 23), (0x7fffe2, 23), (0x7fffe3, 23),
    (0x7fffe4, 23), (0x1fffdc, 21), (0x3fffd8, 22), (0x7fffe5, 23),
    (0x3fffd9, 22), (0x7fffe6, 23), (0x7fffe7, 23), (0xffffef, 24),
    (0x3fffda, 22), (0x1fffdd, 21), (0xfffe9, 20), (0x3fffdb, 22),
    (0x3fffdc, 22), (0x7fffe8, 23), (0x7fffe9, 23), (0x1fffde, 21),
    (0x7fffea, 23), (0x3fffdd, 22), (0x3fffde, 22), (0xfffff0, 24),
    (0x1fffdf, 21), (0x3fffdf, 22), (0x7fffeb, 23), (0x7fffec, 23),
    (0x1fffe0, 21), (0x1fffe1, 21), (0x3fffe0, 22), (0x1fffe2, 21),
    (0x7fffed, 23), (0x3fffe1, 22), (0x7fffee, 23), (0x7fffef, 23),
    (0xfffea, 20), (0x3fffe2, 22), (0x3fffe3, 22), (0x3fffe4, 22),
    (0x7ffff0, 23), (0x3fffe5, 22), (0x3fffe6, 22), (0x7ffff1, 23),
    (0x3ffffe0, 26), (0x3ffffe1, 26), (0xfffeb, 20), (0x7fff1, 19),
    (0x3fffe7, 22), (0x7ffff2, 23), (0x3fffe8, 22), (0x1ffffec, 25),
    (0x3ffffe2, 26), (0x3ffffe3, 26), (0x3ffffe4, 26), (0x7ffffde, 27),
    (0x7ffffdf, 27), (0x3ffffe5, 26), (0xfffff1, 24), (0x1ffffed, 25),
    (0x7fff2, 19), (0x1fffe3, 21), (0x3ffffe6, 26), (0x7ffffe0, 27),
    (0x7ffffe1, 27), (0x3ffffe7, 26), (0x7ffffe2, 27), (0xfffff2, 24),
    (0x1fffe4, 21), (0x1fffe5, 21), (0x3ffffe8, 26), (0x3ffffe9, 26),
    (0xffffffd, 28), (0x7ffffe3, 27), (0x7ffffe4, 27), (0x7ffffe5, 27),
    (0xfffec, 20), (0xfffff3, 24), (0xfffed, 20), (0x1fffe6, 21),
    (0x3fffe9, 22), (0x1fffe7, 21), (0x1fffe8, 21), (0x7ffff3, 23),
    (0x3fffea, 22), (0x3fffeb, 22), (0x1ffffee, 25), (0x1ffffef, 25),
    (0xfffff4, 24), (0xfffff5, 24), (0x3ffffea, 26), (0x7ffff4, 23),
    (0x3ffffeb, 26), (0x7ffffe6, 27), (0x3ffffec, 26), (0x3ffffed, 26),
    (0x7ffffe7, 27), (0x7ffffe8, 27), (0x7ffffe9, 27), (0x7ffffea, 27),
    (0x7ffffeb, 27), (0xffffffe, 28), (0x7ffffec, 27), (0x7ffffed, 27),
    (0x7ffffee, 27), (0x7ffffef, 27), (0x7fffff0, 27), (0x3ffffee, 26),
    (0x3fffffff, 30),
];

/// 解码状态机: (下一状态, 标志位, 符号), 以 (状态, 4bit) 为索引
pub static HUFF_DECODE_TABLE: [[(u8, u8, u8); 16]; 256] = [
    // 状态 0
    [
        (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0),
        (5, 0, 0), (6, 0, 0), (7, 0, 0), (8, 0, 0),
        (9, 0, 0), (10, 0, 0), (11, 0, 0), (12, 0, 0),
        (13, 0, 0), (14, 0, 0), (15, 0, 0), (16, 1, 0),
    ],
    // 状态 1
    [
        (17, 2, 48), (18, 2, 48), (19, 2, 48), (20, 2, 48),
        (21, 2, 48), (22, 2, 48), (23, 2, 48), (24, 3, 48),
        (17, 2, 49), (18, 2, 49), (19, 2, 49), (20, 2, 49),
        (21, 2, 49), (22, 2, 49), (23, 2, 49), (24, 3, 49),
    ],
    // 状态 2
    [
        (17, 2, 50), (18, 2, 50), (19, 2, 50), (20, 2, 50),
        (21, 2, 50), (22, 2, 50), (23, 2, 50), (24, 3, 50),
        (17, 2, 97), (18, 2, 97), (19, 2, 97), (20, 2, 97),
        (21, 2, 97), (22, 2, 97), (23, 2, 97), (24, 3, 97),
    ],
    // 状态 3
    [
        (17, 2, 99), (18, 2, 99), (19, 2, 99), (20, 2, 99),
        (21, 2, 99), (22, 2, 99), (23, 2, 99), (24, 3, 99),
        (17, 2, 101), (18, 2, 101), (19, 2, 101), (20, 2, 101),
        (21, 2, 101), (22, 2, 101), (23, 2, 101), (24, 3, 101),
    ],
    // 状态 4
    [
        (17, 2, 105), (18, 2, 105), (19, 2, 105), (20, 2, 105),
        (21, 2, 105), (22, 2, 105), (23, 2, 105), (24, 3, 105),
        (17, 2, 111), (18, 2, 111), (19, 2, 111), (20, 2, 111),
        (21, 2, 111), (22, 2, 111), (23, 2, 111), (24, 3, 111),
    ],
    // 状态 5
    [
        (17, 2, 115), (18, 2, 115), (19, 2, 115), (20, 2, 115),
        (21, 2, 115), (22, 2, 115), (23, 2, 115), (24, 3, 115),
        (17, 2, 116), (18, 2, 116), (19, 2, 116), (20, 2, 116),
        (21, 2, 116), (22, 2, 116), (23, 2, 116), (24, 3, 116),
    ],
    // 状态 6
    [
        (25, 2, 32), (26, 2, 32), (27, 2, 32), (28, 3, 32),
        (25, 2, 37), (26, 2, 37), (27, 2, 37), (28, 3, 37),
        (25, 2, 45), (26, 2, 45), (27, 2, 45), (28, 3, 45),
        (25, 2, 46), (26, 2, 46), (27, 2, 46), (28, 3, 46),
    ],
    // 状态 7
    [
        (25, 2, 47), (26, 2, 47), (27, 2, 47), (28, 3, 47),
        (25, 2, 51), (26, 2, 51), (27, 2, 51), (28, 3, 51),
        (25, 2, 52), (26, 2, 52), (27, 2, 52), (28, 3, 52),
        (25, 2, 53), (26, 2, 53), (27, 2, 53), (28, 3, 53),
    ],
    // 状态 8
    [
        (25, 2, 54), (26, 2, 54), (27, 2, 54), (28, 3, 54),
        (25, 2, 55), (26, 2, 55), (27, 2, 55), (28, 3, 55),
        (25, 2, 56), (26, 2, 56), (27, 2, 56), (28, 3, 56),
        (25, 2, 57), (26, 2, 57), (27, 2, 57), (28, 3, 57),
    ],
    // 状态 9
    [
        (25, 2, 61), (26, 2, 61), (27, 2, 61), (28, 3, 61),
        (25, 2, 65), (26, 2, 65), (27, 2, 65), (28, 3, 65),
        (25, 2, 95), (26, 2, 95), (27, 2, 95), (28, 3, 95),
        (25, 2, 98), (26, 2, 98), (27, 2, 98), (28, 3, 98),
    ],
    // 状态 10
    [
        (25, 2, 100), (26, 2, 100), (27, 2, 100), (28, 3, 100),
        (25, 2, 102), (26, 2, 102), (27, 2, 102), (28, 3, 102),
        (25, 2, 103), (26, 2, 103), (27, 2, 103), (28, 3, 103),
        (25, 2, 104), (26, 2, 104), (27, 2, 104), (28, 3, 104),
    ],
    // 状态 11
    [
        (25, 2, 108), (26, 2, 108), (27, 2, 108), (28, 3, 108),
        (25, 2, 109), (26, 2, 109), (27, 2, 109), (28, 3, 109),
        (25, 2, 110), (26, 2, 110), (27, 2, 110), (28, 3, 110),
        (25, 2, 112), (26, 2, 112), (27, 2, 112), (28, 3, 112),
    ],
    // 状态 12
    [
        (25, 2, 114), (26, 2, 114), (27, 2, 114), (28, 3, 114),
        (25, 2, 117), (26, 2, 117), (27, 2, 117), (28, 3, 117),
        (29, 2, 58), (30, 3, 58), (29, 2, 66), (30, 3, 66),
        (29, 2, 67), (30, 3, 67), (29, 2, 68), (30, 3, 68),
    ],
    // 状态 13
    [
        (29, 2, 69), (30, 3, 69), (29, 2, 70), (30, 3, 70),
        (29, 2, 71), (30, 3, 71), (29, 2, 72), (30, 3, 72),
        (29, 2, 73), (30, 3, 73), (29, 2, 74), (30, 3, 74),
        (29, 2, 75), (30, 3, 75), (29, 2, 76), (30, 3, 76),
    ],
    // 状态 14
    [
        (29, 2, 77), (30, 3, 77), (29, 2, 78), (30, 3, 78),
        (29, 2, 79), (30, 3, 79), (29, 2, 80), (30, 3, 80),
        (29, 2, 81), (30, 3, 81), (29, 2, 82), (30, 3, 82),
        (29, 2, 83), (30, 3, 83), (29, 2, 84), (30, 3, 84),
    ],
    // 状态 15
    [
        (29, 2, 85), (30, 3, 85), (29, 2, 86), (30, 3, 86),
        (29, 2, 87), (30, 3, 87), (29, 2, 89), (30, 3, 89),
        (29, 2, 106), (30, 3, 106), (29, 2, 107), (30, 3, 107),
        (29, 2, 113), (30, 3, 113), (29, 2, 118), (30, 3, 118),
    ],
    // 状态 16
    [
        (29, 2, 119), (30, 3, 119), (29, 2, 120), (30, 3, 120),
        (29, 2, 121), (30, 3, 121), (29, 2, 122), (30, 3, 122),
        (0, 3, 38), (0, 3, 42), (0, 3, 44), (0, 3, 59),
        (0, 3, 88), (0, 3, 90), (31, 0, 0), (32, 0, 0),
    ],
    // 状态 17
    [
        (25, 2, 48), (26, 2, 48), (27, 2, 48), (28, 3, 48),
        (25, 2, 49), (26, 2, 49), (27, 2, 49), (28, 3, 49),
        (25, 2, 50), (26, 2, 50), (27, 2, 50), (28, 3, 50),
        (25, 2, 97), (26, 2, 97), (27, 2, 97), (28, 3, 97),
    ],
    // 状态 18
    [
        (25, 2, 99), (26, 2, 99), (27, 2, 99), (28, 3, 99),
        (25, 2, 101), (26, 2, 101), (27, 2, 101), (28, 3, 101),
        (25, 2, 105), (26, 2, 105), (27, 2, 105), (28, 3, 105),
        (25, 2, 111), (26, 2, 111), (27, 2, 111), (28, 3, 111),
    ],
    // 状态 19
    [
        (25, 2, 115), (26, 2, 115), (27, 2, 115), (28, 3, 115),
        (25, 2, 116), (26, 2, 116), (27, 2, 116), (28, 3, 116),
        (29, 2, 32), (30, 3, 32), (29, 2, 37), (30, 3, 37),
        (29, 2, 45), (30, 3, 45), (29, 2, 46), (30, 3, 46),
    ],
    // 状态 20
    [
        (29, 2, 47), (30, 3, 47), (29, 2, 51), (30, 3, 51),
        (29, 2, 52), (30, 3, 52), (29, 2, 53), (30, 3, 53),
        (29, 2, 54), (30, 3, 54), (29, 2, 55), (30, 3, 55),
        (29, 2, 56), (30, 3, 56), (29, 2, 57), (30, 3, 57),
    ],
    // 状态 21
    [
        (29, 2, 61), (30, 3, 61), (29, 2, 65), (30, 3, 65),
        (29, 2, 95), (30, 3, 95), (29, 2, 98), (30, 3, 98),
        (29, 2, 100), (30, 3, 100), (29, 2, 102), (30, 3, 102),
        (29, 2, 103), (30, 3, 103), (29, 2, 104), (30, 3, 104),
    ],
    // 状态 22
    [
        (29, 2, 108), (30, 3, 108), (29, 2, 109), (30, 3, 109),
        (29, 2, 110), (30, 3, 110), (29, 2, 112), (30, 3, 112),
        (29, 2, 114), (30, 3, 114), (29, 2, 117), (30, 3, 117),
        (0, 3, 58), (0, 3, 66), (0, 3, 67), (0, 3, 68),
    ],
    // 状态 23
    [
        (0, 3, 69), (0, 3, 70), (0, 3, 71), (0, 3, 72),
        (0, 3, 73), (0, 3, 74), (0, 3, 75), (0, 3, 76),
        (0, 3, 77), (0, 3, 78), (0, 3, 79), (0, 3, 80),
        (0, 3, 81), (0, 3, 82), (0, 3, 83), (0, 3, 84),
    ],
    // 状态 24
    [
        (0, 3, 85), (0, 3, 86), (0, 3, 87), (0, 3, 89),
        (0, 3, 106), (0, 3, 107), (0, 3, 113), (0, 3, 118),
        (0, 3, 119), (0, 3, 120), (0, 3, 121), (0, 3, 122),
        (33, 0, 0), (34, 0, 0), (35, 0, 0), (36, 1, 0),
    ],
    // 状态 25
    [
        (29, 2, 48), (30, 3, 48), (29, 2, 49), (30, 3, 49),
        (29, 2, 50), (30, 3, 50), (29, 2, 97), (30, 3, 97),
        (29, 2, 99), (30, 3, 99), (29, 2, 101), (30, 3, 101),
        (29, 2, 105), (30, 3, 105), (29, 2, 111), (30, 3, 111),
    ],
    // 状态 26
    [
        (29, 2, 115), (30, 3, 115), (29, 2, 116), (30, 3, 116),
        (0, 3, 32), (0, 3, 37), (0, 3, 45), (0, 3, 46),
        (0, 3, 47), (0, 3, 51), (0, 3, 52), (0, 3, 53),
        (0, 3, 54), (0, 3, 55), (0, 3, 56), (0, 3, 57),
    ],
    // 状态 27
    [
        (0, 3, 61), (0, 3, 65), (0, 3, 95), (0, 3, 98),
        (0, 3, 100), (0, 3, 102), (0, 3, 103), (0, 3, 104),
        (0, 3, 108), (0, 3, 109), (0, 3, 110), (0, 3, 112),
        (0, 3, 114), (0, 3, 117), (37, 0, 0), (38, 0, 0),
    ],
    // 状态 28
    [
        (39, 0, 0), (40, 0, 0), (41, 0, 0), (42, 0, 0),
        (43, 0, 0), (44, 0, 0), (45, 0, 0), (46, 0, 0),
        (47, 0, 0), (48, 0, 0), (49, 0, 0), (50, 0, 0),
        (51, 0, 0), (52, 0, 0), (53, 0, 0), (54, 1, 0),
    ],
    // 状态 29
    [
        (0, 3, 48), (0, 3, 49), (0, 3, 50), (0, 3, 97),
        (0, 3, 99), (0, 3, 101), (0, 3, 105), (0, 3, 111),
        (0, 3, 115), (0, 3, 116), (55, 0, 0), (56, 0, 0),
        (57, 0, 0), (58, 0, 0), (59, 0, 0), (60, 0, 0),
    ],
    // 状态 30
    [
        (61, 0, 0), (62, 0, 0), (63, 0, 0), (64, 0, 0),
        (65, 0, 0), (66, 0, 0), (67, 0, 0), (68, 0, 0),
        (69, 0, 0), (70, 0, 0), (71, 0, 0), (72, 0, 0),
        (73, 0, 0), (74, 0, 0), (75, 0, 0), (76, 1, 0),
    ],
    // 状态 31
    [
        (25, 2, 33), (26, 2, 33), (27, 2, 33), (28, 3, 33),
        (25, 2, 34), (26, 2, 34), (27, 2, 34), (28, 3, 34),
        (25, 2, 40), (26, 2, 40), (27, 2, 40), (28, 3, 40),
        (25, 2, 41), (26, 2, 41), (27, 2, 41), (28, 3, 41),
    ],
    // 状态 32
    [
        (25, 2, 63), (26, 2, 63), (27, 2, 63), (28, 3, 63),
        (29, 2, 39), (30, 3, 39), (29, 2, 43), (30, 3, 43),
        (29, 2, 124), (30, 3, 124), (0, 3, 35), (0, 3, 62),
        (77, 0, 0), (78, 0, 0), (79, 0, 0), (80, 0, 0),
    ],
    // 状态 33
    [
        (17, 2, 38), (18, 2, 38), (19, 2, 38), (20, 2, 38),
        (21, 2, 38), (22, 2, 38), (23, 2, 38), (24, 3, 38),
        (17, 2, 42), (18, 2, 42), (19, 2, 42), (20, 2, 42),
        (21, 2, 42), (22, 2, 42), (23, 2, 42), (24, 3, 42),
    ],
    // 状态 34
    [
        (17, 2, 44), (18, 2, 44), (19, 2, 44), (20, 2, 44),
        (21, 2, 44), (22, 2, 44), (23, 2, 44), (24, 3, 44),
        (17, 2, 59), (18, 2, 59), (19, 2, 59), (20, 2, 59),
        (21, 2, 59), (22, 2, 59), (23, 2, 59), (24, 3, 59),
    ],
    // 状态 35
    [
        (17, 2, 88), (18, 2, 88), (19, 2, 88), (20, 2, 88),
        (21, 2, 88), (22, 2, 88), (23, 2, 88), (24, 3, 88),
        (17, 2, 90), (18, 2, 90), (19, 2, 90), (20, 2, 90),
        (21, 2, 90), (22, 2, 90), (23, 2, 90), (24, 3, 90),
    ],
    // 状态 36
    [
        (29, 2, 33), (30, 3, 33), (29, 2, 34), (30, 3, 34),
        (29, 2, 40), (30, 3, 40), (29, 2, 41), (30, 3, 41),
        (29, 2, 63), (30, 3, 63), (0, 3, 39), (0, 3, 43),
        (0, 3, 124), (81, 0, 0), (82, 0, 0), (83, 0, 0),
    ],
    // 状态 37
    [
        (17, 2, 58), (18, 2, 58), (19, 2, 58), (20, 2, 58),
        (21, 2, 58), (22, 2, 58), (23, 2, 58), (24, 3, 58),
        (17, 2, 66), (18, 2, 66), (19, 2, 66), (20, 2, 66),
        (21, 2, 66), (22, 2, 66), (23, 2, 66), (24, 3, 66),
    ],
    // 状态 38
    [
        (17, 2, 67), (18, 2, 67), (19, 2, 67), (20, 2, 67),
        (21, 2, 67), (22, 2, 67), (23, 2, 67), (24, 3, 67),
        (17, 2, 68), (18, 2, 68), (19, 2, 68), (20, 2, 68),
        (21, 2, 68), (22, 2, 68), (23, 2, 68), (24, 3, 68),
    ],
    // 状态 39
    [
        (17, 2, 69), (18, 2, 69), (19, 2, 69), (20, 2, 69),
        (21, 2, 69), (22, 2, 69), (23, 2, 69), (24, 3, 69),
        (17, 2, 70), (18, 2, 70), (19, 2, 70), (20, 2, 70),
        (21, 2, 70), (22, 2, 70), (23, 2, 70), (24, 3, 70),
    ],
    // 状态 40
    [
        (17, 2, 71), (18, 2, 71), (19, 2, 71), (20, 2, 71),
        (21, 2, 71), (22, 2, 71), (23, 2, 71), (24, 3, 71),
        (17, 2, 72), (18, 2, 72), (19, 2, 72), (20, 2, 72),
        (21, 2, 72), (22, 2, 72), (23, 2, 72), (24, 3, 72),
    ],
    // 状态 41
    [
        (17, 2, 73), (18, 2, 73), (19, 2, 73), (20, 2, 73),
        (21, 2, 73), (22, 2, 73), (23, 2, 73), (24, 3, 73),
        (17, 2, 74), (18, 2, 74), (19, 2, 74), (20, 2, 74),
        (21, 2, 74), (22, 2, 74), (23, 2, 74), (24, 3, 74),
    ],
    // 状态 42
    [
        (17, 2, 75), (18, 2, 75), (19, 2, 75), (20, 2, 75),
        (21, 2, 75), (22, 2, 75), (23, 2, 75), (24, 3, 75),
        (17, 2, 76), (18, 2, 76), (19, 2, 76), (20, 2, 76),
        (21, 2, 76), (22, 2, 76), (23, 2, 76), (24, 3, 76),
    ],
    // 状态 43
    [
        (17, 2, 77), (18, 2, 77), (19, 2, 77), (20, 2, 77),
        (21, 2, 77), (22, 2, 77), (23, 2, 77), (24, 3, 77),
        (17, 2, 78), (18, 2, 78), (19, 2, 78), (20, 2, 78),
        (21, 2, 78), (22, 2, 78), (23, 2, 78), (24, 3, 78),
    ],
    // 状态 44
    [
        (17, 2, 79), (18, 2, 79), (19, 2, 79), (20, 2, 79),
        (21, 2, 79), (22, 2, 79), (23, 2, 79), (24, 3, 79),
        (17, 2, 80), (18, 2, 80), (19, 2, 80), (20, 2, 80),
        (21, 2, 80), (22, 2, 80), (23, 2, 80), (24, 3, 80),
    ],
    // 状态 45
    [
        (17, 2, 81), (18, 2, 81), (19, 2, 81), (20, 2, 81),
        (21, 2, 81), (22, 2, 81), (23, 2, 81), (24, 3, 81),
        (17, 2, 82), (18, 2, 82), (19, 2, 82), (20, 2, 82),
        (21, 2, 82), (22, 2, 82), (23, 2, 82), (24, 3, 82),
    ],
    // 状态 46
    [
        (17, 2, 83), (18, 2, 83), (19, 2, 83), (20, 2, 83),
        (21, 2, 83), (22, 2, 83), (23, 2, 83), (24, 3, 83),
        (17, 2, 84), (18, 2, 84), (19, 2, 84), (20, 2, 84),
        (21, 2, 84), (22, 2, 84), (23, 2, 84), (24, 3, 84),
    ],
    // 状态 47
    [
        (17, 2, 85), (18, 2, 85), (19, 2, 85), (20, 2, 85),
        (21, 2, 85), (22, 2, 85), (23, 2, 85), (24, 3, 85),
        (17, 2, 86), (18, 2, 86), (19, 2, 86), (20, 2, 86),
        (21, 2, 86), (22, 2, 86), (23, 2, 86), (24, 3, 86),
    ],
    // 状态 48
    [
        (17, 2, 87), (18, 2, 87), (19, 2, 87), (20, 2, 87),
        (21, 2, 87), (22, 2, 87), (23, 2, 87), (24, 3, 87),
        (17, 2, 89), (18, 2, 89), (19, 2, 89), (20, 2, 89),
        (21, 2, 89), (22, 2, 89), (23, 2, 89), (24, 3, 89),
    ],
    // 状态 49
    [
        (17, 2, 106), (18, 2, 106), (19, 2, 106), (20, 2, 106),
        (21, 2, 106), (22, 2, 106), (23, 2, 106), (24, 3, 106),
        (17, 2, 107), (18, 2, 107), (19, 2, 107), (20, 2, 107),
        (21, 2, 107), (22, 2, 107), (23, 2, 107), (24, 3, 107),
    ],
    // 状态 50
    [
        (17, 2, 113), (18, 2, 113), (19, 2, 113), (20, 2, 113),
        (21, 2, 113), (22, 2, 113), (23, 2, 113), (24, 3, 113),
        (17, 2, 118), (18, 2, 118), (19, 2, 118), (20, 2, 118),
        (21, 2, 118), (22, 2, 118), (23, 2, 118), (24, 3, 118),
    ],
    // 状态 51
    [
        (17, 2, 119), (18, 2, 119), (19, 2, 119), (20, 2, 119),
        (21, 2, 119), (22, 2, 119), (23, 2, 119), (24, 3, 119),
        (17, 2, 120), (18, 2, 120), (19, 2, 120), (20, 2, 120),
        (21, 2, 120), (22, 2, 120), (23, 2, 120), (24, 3, 120),
    ],
    // 状态 52
    [
        (17, 2, 121), (18, 2, 121), (19, 2, 121), (20, 2, 121),
        (21, 2, 121), (22, 2, 121), (23, 2, 121), (24, 3, 121),
        (17, 2, 122), (18, 2, 122), (19, 2, 122), (20, 2, 122),
        (21, 2, 122), (22, 2, 122), (23, 2, 122), (24, 3, 122),
    ],
    // 状态 53
    [
        (25, 2, 38), (26, 2, 38), (27, 2, 38), (28, 3, 38),
        (25, 2, 42), (26, 2, 42), (27, 2, 42), (28, 3, 42),
        (25, 2, 44), (26, 2, 44), (27, 2, 44), (28, 3, 44),
        (25, 2, 59), (26, 2, 59), (27, 2, 59), (28, 3, 59),
    ],
    // 状态 54
    [
        (25, 2, 88), (26, 2, 88), (27, 2, 88), (28, 3, 88),
        (25, 2, 90), (26, 2, 90), (27, 2, 90), (28, 3, 90),
        (0, 3, 33), (0, 3, 34), (0, 3, 40), (0, 3, 41),
        (0, 3, 63), (84, 0, 0), (85, 0, 0), (86, 0, 0),
    ],
    // 状态 55
    [
        (17, 2, 32), (18, 2, 32), (19, 2, 32), (20, 2, 32),
        (21, 2, 32), (22, 2, 32), (23, 2, 32), (24, 3, 32),
        (17, 2, 37), (18, 2, 37), (19, 2, 37), (20, 2, 37),
        (21, 2, 37), (22, 2, 37), (23, 2, 37), (24, 3, 37),
    ],
    // 状态 56
    [
        (17, 2, 45), (18, 2, 45), (19, 2, 45), (20, 2, 45),
        (21, 2, 45), (22, 2, 45), (23, 2, 45), (24, 3, 45),
        (17, 2, 46), (18, 2, 46), (19, 2, 46), (20, 2, 46),
        (21, 2, 46), (22, 2, 46), (23, 2, 46), (24, 3, 46),
    ],
    // 状态 57
    [
        (17, 2, 47), (18, 2, 47), (19, 2, 47), (20, 2, 47),
        (21, 2, 47), (22, 2, 47), (23, 2, 47), (24, 3, 47),
        (17, 2, 51), (18, 2, 51), (19, 2, 51), (20, 2, 51),
        (21, 2, 51), (22, 2, 51), (23, 2, 51), (24, 3, 51),
    ],
    // 状态 58
    [
        (17, 2, 52), (18, 2, 52), (19, 2, 52), (20, 2, 52),
        (21, 2, 52), (22, 2, 52), (23, 2, 52), (24, 3, 52),
        (17, 2, 53), (18, 2, 53), (19, 2, 53), (20, 2, 53),
        (21, 2, 53), (22, 2, 53), (23, 2, 53), (24, 3, 53),
    ],
    // 状态 59
    [
        (17, 2, 54), (18, 2, 54), (19, 2, 54), (20, 2, 54),
        (21, 2, 54), (22, 2, 54), (23, 2, 54), (24, 3, 54),
        (17, 2, 55), (18, 2, 55), (19, 2, 55), (20, 2, 55),
        (21, 2, 55), (22, 2, 55), (23, 2, 55), (24, 3, 55),
    ],
    // 状态 60
    [
        (17, 2, 56), (18, 2, 56), (19, 2, 56), (20, 2, 56),
        (21, 2, 56), (22, 2, 56), (23, 2, 56), (24, 3, 56),
        (17, 2, 57), (18, 2, 57), (19, 2, 57), (20, 2, 57),
        (21, 2, 57), (22, 2, 57), (23, 2, 57), (24, 3, 57),
    ],
    // 状态 61
    [
        (17, 2, 61), (18, 2, 61), (19, 2, 61), (20, 2, 61),
        (21, 2, 61), (22, 2, 61), (23, 2, 61), (24, 3, 61),
        (17, 2, 65), (18, 2, 65), (19, 2, 65), (20, 2, 65),
        (21, 2, 65), (22, 2, 65), (23, 2, 65), (24, 3, 65),
    ],
    // 状态 62
    [
        (17, 2, 95), (18, 2, 95), (19, 2, 95), (20, 2, 95),
        (21, 2, 95), (22, 2, 95), (23, 2, 95), (24, 3, 95),
        (17, 2, 98), (18, 2, 98), (19, 2, 98), (20, 2, 98),
        (21, 2, 98), (22, 2, 98), (23, 2, 98), (24, 3, 98),
    ],
    // 状态 63
    [
        (17, 2, 100), (18, 2, 100), (19, 2, 100), (20, 2, 100),
        (21, 2, 100), (22, 2, 100), (23, 2, 100), (24, 3, 100),
        (17, 2, 102), (18, 2, 102), (19, 2, 102), (20, 2, 102),
        (21, 2, 102), (22, 2, 102), (23, 2, 102), (24, 3, 102),
    ],
    // 状态 64
    [
        (17, 2, 103), (18, 2, 103), (19, 2, 103), (20, 2, 103),
        (21, 2, 103), (22, 2, 103), (23, 2, 103), (24, 3, 103),
        (17, 2, 104), (18, 2, 104), (19, 2, 104), (20, 2, 104),
        (21, 2, 104), (22, 2, 104), (23, 2, 104), (24, 3, 104),
    ],
    // 状态 65
    [
        (17, 2, 108), (18, 2, 108), (19, 2, 108), (20, 2, 108),
        (21, 2, 108), (22, 2, 108), (23, 2, 108), (24, 3, 108),
        (17, 2, 109), (18, 2, 109), (19, 2, 109), (20, 2, 109),
        (21, 2, 109), (22, 2, 109), (23, 2, 109), (24, 3, 109),
    ],
    // 状态 66
    [
        (17, 2, 110), (18, 2, 110), (19, 2, 110), (20, 2, 110),
        (21, 2, 110), (22, 2, 110), (23, 2, 110), (24, 3, 110),
        (17, 2, 112), (18, 2, 112), (19, 2, 112), (20, 2, 112),
        (21, 2, 112), (22, 2, 112), (23, 2, 112), (24, 3, 112),
    ],
    // 状态 67
    [
        (17, 2, 114), (18, 2, 114), (19, 2, 114), (20, 2, 114),
        (21, 2, 114), (22, 2, 114), (23, 2, 114), (24, 3, 114),
        (17, 2, 117), (18, 2, 117), (19, 2, 117), (20, 2, 117),
        (21, 2, 117), (22, 2, 117), (23, 2, 117), (24, 3, 117),
    ],
    // 状态 68
    [
        (25, 2, 58), (26, 2, 58), (27, 2, 58), (28, 3, 58),
        (25, 2, 66), (26, 2, 66), (27, 2, 66), (28, 3, 66),
        (25, 2, 67), (26, 2, 67), (27, 2, 67), (28, 3, 67),
        (25, 2, 68), (26, 2, 68), (27, 2, 68), (28, 3, 68),
    ],
    // 状态 69
    [
        (25, 2, 69), (26, 2, 69), (27, 2, 69), (28, 3, 69),
        (25, 2, 70), (26, 2, 70), (27, 2, 70), (28, 3, 70),
        (25, 2, 71), (26, 2, 71), (27, 2, 71), (28, 3, 71),
        (25, 2, 72), (26, 2, 72), (27, 2, 72), (28, 3, 72),
    ],
    // 状态 70
    [
        (25, 2, 73), (26, 2, 73), (27, 2, 73), (28, 3, 73),
        (25, 2, 74), (26, 2, 74), (27, 2, 74), (28, 3, 74),
        (25, 2, 75), (26, 2, 75), (27, 2, 75), (28, 3, 75),
        (25, 2, 76), (26, 2, 76), (27, 2, 76), (28, 3, 76),
    ],
    // 状态 71
    [
        (25, 2, 77), (26, 2, 77), (27, 2, 77), (28, 3, 77),
        (25, 2, 78), (26, 2, 78), (27, 2, 78), (28, 3, 78),
        (25, 2, 79), (26, 2, 79), (27, 2, 79), (28, 3, 79),
        (25, 2, 80), (26, 2, 80), (27, 2, 80), (28, 3, 80),
    ],
    // 状态 72
    [
        (25, 2, 81), (26, 2, 81), (27, 2, 81), (28, 3, 81),
        (25, 2, 82), (26, 2, 82), (27, 2, 82), (28, 3, 82),
        (25, 2, 83), (26, 2, 83), (27, 2, 83), (28, 3, 83),
        (25, 2, 84), (26, 2, 84), (27, 2, 84), (28, 3, 84),
    ],
    // 状态 73
    [
        (25, 2, 85), (26, 2, 85), (27, 2, 85), (28, 3, 85),
        (25, 2, 86), (26, 2, 86), (27, 2, 86), (28, 3, 86),
        (25, 2, 87), (26, 2, 87), (27, 2, 87), (28, 3, 87),
        (25, 2, 89), (26, 2, 89), (27, 2, 89), (28, 3, 89),
    ],
    // 状态 74
    [
        (25, 2, 106), (26, 2, 106), (27, 2, 106), (28, 3, 106),
        (25, 2, 107), (26, 2, 107), (27, 2, 107), (28, 3, 107),
        (25, 2, 113), (26, 2, 113), (27, 2, 113), (28, 3, 113),
        (25, 2, 118), (26, 2, 118), (27, 2, 118), (28, 3, 118),
    ],
    // 状态 75
    [
        (25, 2, 119), (26, 2, 119), (27, 2, 119), (28, 3, 119),
        (25, 2, 120), (26, 2, 120), (27, 2, 120), (28, 3, 120),
        (25, 2, 121), (26, 2, 121), (27, 2, 121), (28, 3, 121),
        (25, 2, 122), (26, 2, 122), (27, 2, 122), (28, 3, 122),
    ],
    // 状态 76
    [
        (29, 2, 38), (30, 3, 38), (29, 2, 42), (30, 3, 42),
        (29, 2, 44), (30, 3, 44), (29, 2, 59), (30, 3, 59),
        (29, 2, 88), (30, 3, 88), (29, 2, 90), (30, 3, 90),
        (87, 0, 0), (88, 0, 0), (89, 0, 0), (90, 0, 0),
    ],
    // 状态 77
    [
        (17, 2, 0), (18, 2, 0), (19, 2, 0), (20, 2, 0),
        (21, 2, 0), (22, 2, 0), (23, 2, 0), (24, 3, 0),
        (17, 2, 36), (18, 2, 36), (19, 2, 36), (20, 2, 36),
        (21, 2, 36), (22, 2, 36), (23, 2, 36), (24, 3, 36),
    ],
    // 状态 78
    [
        (17, 2, 64), (18, 2, 64), (19, 2, 64), (20, 2, 64),
        (21, 2, 64), (22, 2, 64), (23, 2, 64), (24, 3, 64),
        (17, 2, 91), (18, 2, 91), (19, 2, 91), (20, 2, 91),
        (21, 2, 91), (22, 2, 91), (23, 2, 91), (24, 3, 91),
    ],
    // 状态 79
    [
        (17, 2, 93), (18, 2, 93), (19, 2, 93), (20, 2, 93),
        (21, 2, 93), (22, 2, 93), (23, 2, 93), (24, 3, 93),
        (17, 2, 126), (18, 2, 126), (19, 2, 126), (20, 2, 126),
        (21, 2, 126), (22, 2, 126), (23, 2, 126), (24, 3, 126),
    ],
    // 状态 80
    [
        (25, 2, 94), (26, 2, 94), (27, 2, 94), (28, 3, 94),
        (25, 2, 125), (26, 2, 125), (27, 2, 125), (28, 3, 125),
        (29, 2, 60), (30, 3, 60), (29, 2, 96), (30, 3, 96),
        (29, 2, 123), (30, 3, 123), (91, 0, 0), (92, 0, 0),
    ],
    // 状态 81
    [
        (17, 2, 35), (18, 2, 35), (19, 2, 35), (20, 2, 35),
        (21, 2, 35), (22, 2, 35), (23, 2, 35), (24, 3, 35),
        (17, 2, 62), (18, 2, 62), (19, 2, 62), (20, 2, 62),
        (21, 2, 62), (22, 2, 62), (23, 2, 62), (24, 3, 62),
    ],
    // 状态 82
    [
        (25, 2, 0), (26, 2, 0), (27, 2, 0), (28, 3, 0),
        (25, 2, 36), (26, 2, 36), (27, 2, 36), (28, 3, 36),
        (25, 2, 64), (26, 2, 64), (27, 2, 64), (28, 3, 64),
        (25, 2, 91), (26, 2, 91), (27, 2, 91), (28, 3, 91),
    ],
    // 状态 83
    [
        (25, 2, 93), (26, 2, 93), (27, 2, 93), (28, 3, 93),
        (25, 2, 126), (26, 2, 126), (27, 2, 126), (28, 3, 126),
        (29, 2, 94), (30, 3, 94), (29, 2, 125), (30, 3, 125),
        (0, 3, 60), (0, 3, 96), (0, 3, 123), (93, 0, 0),
    ],
    // 状态 84
    [
        (17, 2, 39), (18, 2, 39), (19, 2, 39), (20, 2, 39),
        (21, 2, 39), (22, 2, 39), (23, 2, 39), (24, 3, 39),
        (17, 2, 43), (18, 2, 43), (19, 2, 43), (20, 2, 43),
        (21, 2, 43), (22, 2, 43), (23, 2, 43), (24, 3, 43),
    ],
    // 状态 85
    [
        (17, 2, 124), (18, 2, 124), (19, 2, 124), (20, 2, 124),
        (21, 2, 124), (22, 2, 124), (23, 2, 124), (24, 3, 124),
        (25, 2, 35), (26, 2, 35), (27, 2, 35), (28, 3, 35),
        (25, 2, 62), (26, 2, 62), (27, 2, 62), (28, 3, 62),
    ],
    // 状态 86
    [
        (29, 2, 0), (30, 3, 0), (29, 2, 36), (30, 3, 36),
        (29, 2, 64), (30, 3, 64), (29, 2, 91), (30, 3, 91),
        (29, 2, 93), (30, 3, 93), (29, 2, 126), (30, 3, 126),
        (0, 3, 94), (0, 3, 125), (94, 0, 0), (95, 0, 0),
    ],
    // 状态 87
    [
        (17, 2, 33), (18, 2, 33), (19, 2, 33), (20, 2, 33),
        (21, 2, 33), (22, 2, 33), (23, 2, 33), (24, 3, 33),
        (17, 2, 34), (18, 2, 34), (19, 2, 34), (20, 2, 34),
        (21, 2, 34), (22, 2, 34), (23, 2, 34), (24, 3, 34),
    ],
    // 状态 88
    [
        (17, 2, 40), (18, 2, 40), (19, 2, 40), (20, 2, 40),
        (21, 2, 40), (22, 2, 40), (23, 2, 40), (24, 3, 40),
        (17, 2, 41), (18, 2, 41), (19, 2, 41), (20, 2, 41),
        (21, 2, 41), (22, 2, 41), (23, 2, 41), (24, 3, 41),
    ],
    // 状态 89
    [
        (17, 2, 63), (18, 2, 63), (19, 2, 63), (20, 2, 63),
        (21, 2, 63), (22, 2, 63), (23, 2, 63), (24, 3, 63),
        (25, 2, 39), (26, 2, 39), (27, 2, 39), (28, 3, 39),
        (25, 2, 43), (26, 2, 43), (27, 2, 43), (28, 3, 43),
    ],
    // 状态 90
    [
        (25, 2, 124), (26, 2, 124), (27, 2, 124), (28, 3, 124),
        (29, 2, 35), (30, 3, 35), (29, 2, 62), (30, 3, 62),
        (0, 3, 0), (0, 3, 36), (0, 3, 64), (0, 3, 91),
        (0, 3, 93), (0, 3, 126), (96, 0, 0), (97, 0, 0),
    ],
    // 状态 91
    [
        (29, 2, 92), (30, 3, 92), (29, 2, 195), (30, 3, 195),
        (29, 2, 208), (30, 3, 208), (0, 3, 128), (0, 3, 130),
        (0, 3, 131), (0, 3, 162), (0, 3, 184), (0, 3, 194),
        (0, 3, 224), (0, 3, 226), (98, 0, 0), (99, 0, 0),
    ],
    // 状态 92
    [
        (100, 0, 0), (101, 0, 0), (102, 0, 0), (103, 0, 0),
        (104, 0, 0), (105, 0, 0), (106, 0, 0), (107, 0, 0),
        (108, 0, 0), (109, 0, 0), (110, 0, 0), (111, 0, 0),
        (112, 0, 0), (113, 0, 0), (114, 0, 0), (115, 0, 0),
    ],
    // 状态 93
    [
        (0, 3, 92), (0, 3, 195), (0, 3, 208), (116, 0, 0),
        (117, 0, 0), (118, 0, 0), (119, 0, 0), (120, 0, 0),
        (121, 0, 0), (122, 0, 0), (123, 0, 0), (124, 0, 0),
        (125, 0, 0), (126, 0, 0), (127, 0, 0), (128, 0, 0),
    ],
    // 状态 94
    [
        (17, 2, 60), (18, 2, 60), (19, 2, 60), (20, 2, 60),
        (21, 2, 60), (22, 2, 60), (23, 2, 60), (24, 3, 60),
        (17, 2, 96), (18, 2, 96), (19, 2, 96), (20, 2, 96),
        (21, 2, 96), (22, 2, 96), (23, 2, 96), (24, 3, 96),
    ],
    // 状态 95
    [
        (17, 2, 123), (18, 2, 123), (19, 2, 123), (20, 2, 123),
        (21, 2, 123), (22, 2, 123), (23, 2, 123), (24, 3, 123),
        (129, 0, 0), (130, 0, 0), (131, 0, 0), (132, 0, 0),
        (133, 0, 0), (134, 0, 0), (135, 0, 0), (136, 0, 0),
    ],
    // 状态 96
    [
        (17, 2, 94), (18, 2, 94), (19, 2, 94), (20, 2, 94),
        (21, 2, 94), (22, 2, 94), (23, 2, 94), (24, 3, 94),
        (17, 2, 125), (18, 2, 125), (19, 2, 125), (20, 2, 125),
        (21, 2, 125), (22, 2, 125), (23, 2, 125), (24, 3, 125),
    ],
    // 状态 97
    [
        (25, 2, 60), (26, 2, 60), (27, 2, 60), (28, 3, 60),
        (25, 2, 96), (26, 2, 96), (27, 2, 96), (28, 3, 96),
        (25, 2, 123), (26, 2, 123), (27, 2, 123), (28, 3, 123),
        (137, 0, 0), (138, 0, 0), (139, 0, 0), (140, 0, 0),
    ],
    // 状态 98
    [
        (17, 2, 153), (18, 2, 153), (19, 2, 153), (20, 2, 153),
        (21, 2, 153), (22, 2, 153), (23, 2, 153), (24, 3, 153),
        (17, 2, 161), (18, 2, 161), (19, 2, 161), (20, 2, 161),
        (21, 2, 161), (22, 2, 161), (23, 2, 161), (24, 3, 161),
    ],
    // 状态 99
    [
        (17, 2, 167), (18, 2, 167), (19, 2, 167), (20, 2, 167),
        (21, 2, 167), (22, 2, 167), (23, 2, 167), (24, 3, 167),
        (17, 2, 172), (18, 2, 172), (19, 2, 172), (20, 2, 172),
        (21, 2, 172), (22, 2, 172), (23, 2, 172), (24, 3, 172),
    ],
    // 状态 100
    [
        (17, 2, 176), (18, 2, 176), (19, 2, 176), (20, 2, 176),
        (21, 2, 176), (22, 2, 176), (23, 2, 176), (24, 3, 176),
        (17, 2, 177), (18, 2, 177), (19, 2, 177), (20, 2, 177),
        (21, 2, 177), (22, 2, 177), (23, 2, 177), (24, 3, 177),
    ],
    // 状态 101
    [
        (17, 2, 179), (18, 2, 179), (19, 2, 179), (20, 2, 179),
        (21, 2, 179), (22, 2, 179), (23, 2, 179), (24, 3, 179),
        (17, 2, 209), (18, 2, 209), (19, 2, 209), (20, 2, 209),
        (21, 2, 209), (22, 2, 209), (23, 2, 209), (24, 3, 209),
    ],
    // 状态 102
    [
        (17, 2, 216), (18, 2, 216), (19, 2, 216), (20, 2, 216),
        (21, 2, 216), (22, 2, 216), (23, 2, 216), (24, 3, 216),
        (17, 2, 217), (18, 2, 217), (19, 2, 217), (20, 2, 217),
        (21, 2, 217), (22, 2, 217), (23, 2, 217), (24, 3, 217),
    ],
    // 状态 103
    [
        (17, 2, 227), (18, 2, 227), (19, 2, 227), (20, 2, 227),
        (21, 2, 227), (22, 2, 227), (23, 2, 227), (24, 3, 227),
        (17, 2, 229), (18, 2, 229), (19, 2, 229), (20, 2, 229),
        (21, 2, 229), (22, 2, 229), (23, 2, 229), (24, 3, 229),
    ],
    // 状态 104
    [
        (17, 2, 230), (18, 2, 230), (19, 2, 230), (20, 2, 230),
        (21, 2, 230), (22, 2, 230), (23, 2, 230), (24, 3, 230),
        (25, 2, 129), (26, 2, 129), (27, 2, 129), (28, 3, 129),
        (25, 2, 132), (26, 2, 132), (27, 2, 132), (28, 3, 132),
    ],
    // 状态 105
    [
        (25, 2, 133), (26, 2, 133), (27, 2, 133), (28, 3, 133),
        (25, 2, 134), (26, 2, 134), (27, 2, 134), (28, 3, 134),
        (25, 2, 136), (26, 2, 136), (27, 2, 136), (28, 3, 136),
        (25, 2, 146), (26, 2, 146), (27, 2, 146), (28, 3, 146),
    ],
    // 状态 106
    [
        (25, 2, 154), (26, 2, 154), (27, 2, 154), (28, 3, 154),
        (25, 2, 156), (26, 2, 156), (27, 2, 156), (28, 3, 156),
        (25, 2, 160), (26, 2, 160), (27, 2, 160), (28, 3, 160),
        (25, 2, 163), (26, 2, 163), (27, 2, 163), (28, 3, 163),
    ],
    // 状态 107
    [
        (25, 2, 164), (26, 2, 164), (27, 2, 164), (28, 3, 164),
        (25, 2, 169), (26, 2, 169), (27, 2, 169), (28, 3, 169),
        (25, 2, 170), (26, 2, 170), (27, 2, 170), (28, 3, 170),
        (25, 2, 173), (26, 2, 173), (27, 2, 173), (28, 3, 173),
    ],
    // 状态 108
    [
        (25, 2, 178), (26, 2, 178), (27, 2, 178), (28, 3, 178),
        (25, 2, 181), (26, 2, 181), (27, 2, 181), (28, 3, 181),
        (25, 2, 185), (26, 2, 185), (27, 2, 185), (28, 3, 185),
        (25, 2, 186), (26, 2, 186), (27, 2, 186), (28, 3, 186),
    ],
    // 状态 109
    [
        (25, 2, 187), (26, 2, 187), (27, 2, 187), (28, 3, 187),
        (25, 2, 189), (26, 2, 189), (27, 2, 189), (28, 3, 189),
        (25, 2, 190), (26, 2, 190), (27, 2, 190), (28, 3, 190),
        (25, 2, 196), (26, 2, 196), (27, 2, 196), (28, 3, 196),
    ],
    // 状态 110
    [
        (25, 2, 198), (26, 2, 198), (27, 2, 198), (28, 3, 198),
        (25, 2, 228), (26, 2, 228), (27, 2, 228), (28, 3, 228),
        (25, 2, 232), (26, 2, 232), (27, 2, 232), (28, 3, 232),
        (25, 2, 233), (26, 2, 233), (27, 2, 233), (28, 3, 233),
    ],
    // 状态 111
    [
        (29, 2, 1), (30, 3, 1), (29, 2, 135), (30, 3, 135),
        (29, 2, 137), (30, 3, 137), (29, 2, 138), (30, 3, 138),
        (29, 2, 139), (30, 3, 139), (29, 2, 140), (30, 3, 140),
        (29, 2, 141), (30, 3, 141), (29, 2, 143), (30, 3, 143),
    ],
    // 状态 112
    [
        (29, 2, 147), (30, 3, 147), (29, 2, 149), (30, 3, 149),
        (29, 2, 150), (30, 3, 150), (29, 2, 151), (30, 3, 151),
        (29, 2, 152), (30, 3, 152), (29, 2, 155), (30, 3, 155),
        (29, 2, 157), (30, 3, 157), (29, 2, 158), (30, 3, 158),
    ],
    // 状态 113
    [
        (29, 2, 165), (30, 3, 165), (29, 2, 166), (30, 3, 166),
        (29, 2, 168), (30, 3, 168), (29, 2, 174), (30, 3, 174),
        (29, 2, 175), (30, 3, 175), (29, 2, 180), (30, 3, 180),
        (29, 2, 182), (30, 3, 182), (29, 2, 183), (30, 3, 183),
    ],
    // 状态 114
    [
        (29, 2, 188), (30, 3, 188), (29, 2, 191), (30, 3, 191),
        (29, 2, 197), (30, 3, 197), (29, 2, 231), (30, 3, 231),
        (29, 2, 239), (30, 3, 239), (0, 3, 9), (0, 3, 142),
        (0, 3, 144), (0, 3, 145), (0, 3, 148), (0, 3, 159),
    ],
    // 状态 115
    [
        (0, 3, 171), (0, 3, 206), (0, 3, 215), (0, 3, 225),
        (0, 3, 236), (0, 3, 237), (141, 0, 0), (142, 0, 0),
        (143, 0, 0), (144, 0, 0), (145, 0, 0), (146, 0, 0),
        (147, 0, 0), (148, 0, 0), (149, 0, 0), (150, 0, 0),
    ],
    // 状态 116
    [
        (17, 2, 128), (18, 2, 128), (19, 2, 128), (20, 2, 128),
        (21, 2, 128), (22, 2, 128), (23, 2, 128), (24, 3, 128),
        (17, 2, 130), (18, 2, 130), (19, 2, 130), (20, 2, 130),
        (21, 2, 130), (22, 2, 130), (23, 2, 130), (24, 3, 130),
    ],
    // 状态 117
    [
        (17, 2, 131), (18, 2, 131), (19, 2, 131), (20, 2, 131),
        (21, 2, 131), (22, 2, 131), (23, 2, 131), (24, 3, 131),
        (17, 2, 162), (18, 2, 162), (19, 2, 162), (20, 2, 162),
        (21, 2, 162), (22, 2, 162), (23, 2, 162), (24, 3, 162),
    ],
    // 状态 118
    [
        (17, 2, 184), (18, 2, 184), (19, 2, 184), (20, 2, 184),
        (21, 2, 184), (22, 2, 184), (23, 2, 184), (24, 3, 184),
        (17, 2, 194), (18, 2, 194), (19, 2, 194), (20, 2, 194),
        (21, 2, 194), (22, 2, 194), (23, 2, 194), (24, 3, 194),
    ],
    // 状态 119
    [
        (17, 2, 224), (18, 2, 224), (19, 2, 224), (20, 2, 224),
        (21, 2, 224), (22, 2, 224), (23, 2, 224), (24, 3, 224),
        (17, 2, 226), (18, 2, 226), (19, 2, 226), (20, 2, 226),
        (21, 2, 226), (22, 2, 226), (23, 2, 226), (24, 3, 226),
    ],
    // 状态 120
    [
        (25, 2, 153), (26, 2, 153), (27, 2, 153), (28, 3, 153),
        (25, 2, 161), (26, 2, 161), (27, 2, 161), (28, 3, 161),
        (25, 2, 167), (26, 2, 167), (27, 2, 167), (28, 3, 167),
        (25, 2, 172), (26, 2, 172), (27, 2, 172), (28, 3, 172),
    ],
    // 状态 121
    [
        (25, 2, 176), (26, 2, 176), (27, 2, 176), (28, 3, 176),
        (25, 2, 177), (26, 2, 177), (27, 2, 177), (28, 3, 177),
        (25, 2, 179), (26, 2, 179), (27, 2, 179), (28, 3, 179),
        (25, 2, 209), (26, 2, 209), (27, 2, 209), (28, 3, 209),
    ],
    // 状态 122
    [
        (25, 2, 216), (26, 2, 216), (27, 2, 216), (28, 3, 216),
        (25, 2, 217), (26, 2, 217), (27, 2, 217), (28, 3, 217),
        (25, 2, 227), (26, 2, 227), (27, 2, 227), (28, 3, 227),
        (25, 2, 229), (26, 2, 229), (27, 2, 229), (28, 3, 229),
    ],
    // 状态 123
    [
        (25, 2, 230), (26, 2, 230), (27, 2, 230), (28, 3, 230),
        (29, 2, 129), (30, 3, 129), (29, 2, 132), (30, 3, 132),
        (29, 2, 133), (30, 3, 133), (29, 2, 134), (30, 3, 134),
        (29, 2, 136), (30, 3, 136), (29, 2, 146), (30, 3, 146),
    ],
    // 状态 124
    [
        (29, 2, 154), (30, 3, 154), (29, 2, 156), (30, 3, 156),
        (29, 2, 160), (30, 3, 160), (29, 2, 163), (30, 3, 163),
        (29, 2, 164), (30, 3, 164), (29, 2, 169), (30, 3, 169),
        (29, 2, 170), (30, 3, 170), (29, 2, 173), (30, 3, 173),
    ],
    // 状态 125
    [
        (29, 2, 178), (30, 3, 178), (29, 2, 181), (30, 3, 181),
        (29, 2, 185), (30, 3, 185), (29, 2, 186), (30, 3, 186),
        (29, 2, 187), (30, 3, 187), (29, 2, 189), (30, 3, 189),
        (29, 2, 190), (30, 3, 190), (29, 2, 196), (30, 3, 196),
    ],
    // 状态 126
    [
        (29, 2, 198), (30, 3, 198), (29, 2, 228), (30, 3, 228),
        (29, 2, 232), (30, 3, 232), (29, 2, 233), (30, 3, 233),
        (0, 3, 1), (0, 3, 135), (0, 3, 137), (0, 3, 138),
        (0, 3, 139), (0, 3, 140), (0, 3, 141), (0, 3, 143),
    ],
    // 状态 127
    [
        (0, 3, 147), (0, 3, 149), (0, 3, 150), (0, 3, 151),
        (0, 3, 152), (0, 3, 155), (0, 3, 157), (0, 3, 158),
        (0, 3, 165), (0, 3, 166), (0, 3, 168), (0, 3, 174),
        (0, 3, 175), (0, 3, 180), (0, 3, 182), (0, 3, 183),
    ],
    // 状态 128
    [
        (0, 3, 188), (0, 3, 191), (0, 3, 197), (0, 3, 231),
        (0, 3, 239), (151, 0, 0), (152, 0, 0), (153, 0, 0),
        (154, 0, 0), (155, 0, 0), (156, 0, 0), (157, 0, 0),
        (158, 0, 0), (159, 0, 0), (160, 0, 0), (161, 0, 0),
    ],
    // 状态 129
    [
        (17, 2, 92), (18, 2, 92), (19, 2, 92), (20, 2, 92),
        (21, 2, 92), (22, 2, 92), (23, 2, 92), (24, 3, 92),
        (17, 2, 195), (18, 2, 195), (19, 2, 195), (20, 2, 195),
        (21, 2, 195), (22, 2, 195), (23, 2, 195), (24, 3, 195),
    ],
    // 状态 130
    [
        (17, 2, 208), (18, 2, 208), (19, 2, 208), (20, 2, 208),
        (21, 2, 208), (22, 2, 208), (23, 2, 208), (24, 3, 208),
        (25, 2, 128), (26, 2, 128), (27, 2, 128), (28, 3, 128),
        (25, 2, 130), (26, 2, 130), (27, 2, 130), (28, 3, 130),
    ],
    // 状态 131
    [
        (25, 2, 131), (26, 2, 131), (27, 2, 131), (28, 3, 131),
        (25, 2, 162), (26, 2, 162), (27, 2, 162), (28, 3, 162),
        (25, 2, 184), (26, 2, 184), (27, 2, 184), (28, 3, 184),
        (25, 2, 194), (26, 2, 194), (27, 2, 194), (28, 3, 194),
    ],
    // 状态 132
    [
        (25, 2, 224), (26, 2, 224), (27, 2, 224), (28, 3, 224),
        (25, 2, 226), (26, 2, 226), (27, 2, 226), (28, 3, 226),
        (29, 2, 153), (30, 3, 153), (29, 2, 161), (30, 3, 161),
        (29, 2, 167), (30, 3, 167), (29, 2, 172), (30, 3, 172),
    ],
    // 状态 133
    [
        (29, 2, 176), (30, 3, 176), (29, 2, 177), (30, 3, 177),
        (29, 2, 179), (30, 3, 179), (29, 2, 209), (30, 3, 209),
        (29, 2, 216), (30, 3, 216), (29, 2, 217), (30, 3, 217),
        (29, 2, 227), (30, 3, 227), (29, 2, 229), (30, 3, 229),
    ],
    // 状态 134
    [
        (29, 2, 230), (30, 3, 230), (0, 3, 129), (0, 3, 132),
        (0, 3, 133), (0, 3, 134), (0, 3, 136), (0, 3, 146),
        (0, 3, 154), (0, 3, 156), (0, 3, 160), (0, 3, 163),
        (0, 3, 164), (0, 3, 169), (0, 3, 170), (0, 3, 173),
    ],
    // 状态 135
    [
        (0, 3, 178), (0, 3, 181), (0, 3, 185), (0, 3, 186),
        (0, 3, 187), (0, 3, 189), (0, 3, 190), (0, 3, 196),
        (0, 3, 198), (0, 3, 228), (0, 3, 232), (0, 3, 233),
        (162, 0, 0), (163, 0, 0), (164, 0, 0), (165, 0, 0),
    ],
    // 状态 136
    [
        (166, 0, 0), (167, 0, 0), (168, 0, 0), (169, 0, 0),
        (170, 0, 0), (171, 0, 0), (172, 0, 0), (173, 0, 0),
        (174, 0, 0), (175, 0, 0), (176, 0, 0), (177, 0, 0),
        (178, 0, 0), (179, 0, 0), (180, 0, 0), (181, 0, 0),
    ],
    // 状态 137
    [
        (25, 2, 92), (26, 2, 92), (27, 2, 92), (28, 3, 92),
        (25, 2, 195), (26, 2, 195), (27, 2, 195), (28, 3, 195),
        (25, 2, 208), (26, 2, 208), (27, 2, 208), (28, 3, 208),
        (29, 2, 128), (30, 3, 128), (29, 2, 130), (30, 3, 130),
    ],
    // 状态 138
    [
        (29, 2, 131), (30, 3, 131), (29, 2, 162), (30, 3, 162),
        (29, 2, 184), (30, 3, 184), (29, 2, 194), (30, 3, 194),
        (29, 2, 224), (30, 3, 224), (29, 2, 226), (30, 3, 226),
        (0, 3, 153), (0, 3, 161), (0, 3, 167), (0, 3, 172),
    ],
    // 状态 139
    [
        (0, 3, 176), (0, 3, 177), (0, 3, 179), (0, 3, 209),
        (0, 3, 216), (0, 3, 217), (0, 3, 227), (0, 3, 229),
        (0, 3, 230), (182, 0, 0), (183, 0, 0), (184, 0, 0),
        (185, 0, 0), (186, 0, 0), (187, 0, 0), (188, 0, 0),
    ],
    // 状态 140
    [
        (189, 0, 0), (190, 0, 0), (191, 0, 0), (192, 0, 0),
        (193, 0, 0), (194, 0, 0), (195, 0, 0), (196, 0, 0),
        (197, 0, 0), (198, 0, 0), (199, 0, 0), (200, 0, 0),
        (201, 0, 0), (202, 0, 0), (203, 0, 0), (204, 0, 0),
    ],
    // 状态 141
    [
        (17, 2, 199), (18, 2, 199), (19, 2, 199), (20, 2, 199),
        (21, 2, 199), (22, 2, 199), (23, 2, 199), (24, 3, 199),
        (17, 2, 207), (18, 2, 207), (19, 2, 207), (20, 2, 207),
        (21, 2, 207), (22, 2, 207), (23, 2, 207), (24, 3, 207),
    ],
    // 状态 142
    [
        (17, 2, 234), (18, 2, 234), (19, 2, 234), (20, 2, 234),
        (21, 2, 234), (22, 2, 234), (23, 2, 234), (24, 3, 234),
        (17, 2, 235), (18, 2, 235), (19, 2, 235), (20, 2, 235),
        (21, 2, 235), (22, 2, 235), (23, 2, 235), (24, 3, 235),
    ],
    // 状态 143
    [
        (25, 2, 192), (26, 2, 192), (27, 2, 192), (28, 3, 192),
        (25, 2, 193), (26, 2, 193), (27, 2, 193), (28, 3, 193),
        (25, 2, 200), (26, 2, 200), (27, 2, 200), (28, 3, 200),
        (25, 2, 201), (26, 2, 201), (27, 2, 201), (28, 3, 201),
    ],
    // 状态 144
    [
        (25, 2, 202), (26, 2, 202), (27, 2, 202), (28, 3, 202),
        (25, 2, 205), (26, 2, 205), (27, 2, 205), (28, 3, 205),
        (25, 2, 210), (26, 2, 210), (27, 2, 210), (28, 3, 210),
        (25, 2, 213), (26, 2, 213), (27, 2, 213), (28, 3, 213),
    ],
    // 状态 145
    [
        (25, 2, 218), (26, 2, 218), (27, 2, 218), (28, 3, 218),
        (25, 2, 219), (26, 2, 219), (27, 2, 219), (28, 3, 219),
        (25, 2, 238), (26, 2, 238), (27, 2, 238), (28, 3, 238),
        (25, 2, 240), (26, 2, 240), (27, 2, 240), (28, 3, 240),
    ],
    // 状态 146
    [
        (25, 2, 242), (26, 2, 242), (27, 2, 242), (28, 3, 242),
        (25, 2, 243), (26, 2, 243), (27, 2, 243), (28, 3, 243),
        (25, 2, 255), (26, 2, 255), (27, 2, 255), (28, 3, 255),
        (29, 2, 203), (30, 3, 203), (29, 2, 204), (30, 3, 204),
    ],
    // 状态 147
    [
        (29, 2, 211), (30, 3, 211), (29, 2, 212), (30, 3, 212),
        (29, 2, 214), (30, 3, 214), (29, 2, 221), (30, 3, 221),
        (29, 2, 222), (30, 3, 222), (29, 2, 223), (30, 3, 223),
        (29, 2, 241), (30, 3, 241), (29, 2, 244), (30, 3, 244),
    ],
    // 状态 148
    [
        (29, 2, 245), (30, 3, 245), (29, 2, 246), (30, 3, 246),
        (29, 2, 247), (30, 3, 247), (29, 2, 248), (30, 3, 248),
        (29, 2, 250), (30, 3, 250), (29, 2, 251), (30, 3, 251),
        (29, 2, 252), (30, 3, 252), (29, 2, 253), (30, 3, 253),
    ],
    // 状态 149
    [
        (29, 2, 254), (30, 3, 254), (0, 3, 2), (0, 3, 3),
        (0, 3, 4), (0, 3, 5), (0, 3, 6), (0, 3, 7),
        (0, 3, 8), (0, 3, 11), (0, 3, 12), (0, 3, 14),
        (0, 3, 15), (0, 3, 16), (0, 3, 17), (0, 3, 18),
    ],
    // 状态 150
    [
        (0, 3, 19), (0, 3, 20), (0, 3, 21), (0, 3, 23),
        (0, 3, 24), (0, 3, 25), (0, 3, 26), (0, 3, 27),
        (0, 3, 28), (0, 3, 29), (0, 3, 30), (0, 3, 31),
        (0, 3, 127), (0, 3, 220), (0, 3, 249), (205, 0, 0),
    ],
    // 状态 151
    [
        (17, 2, 9), (18, 2, 9), (19, 2, 9), (20, 2, 9),
        (21, 2, 9), (22, 2, 9), (23, 2, 9), (24, 3, 9),
        (17, 2, 142), (18, 2, 142), (19, 2, 142), (20, 2, 142),
        (21, 2, 142), (22, 2, 142), (23, 2, 142), (24, 3, 142),
    ],
    // 状态 152
    [
        (17, 2, 144), (18, 2, 144), (19, 2, 144), (20, 2, 144),
        (21, 2, 144), (22, 2, 144), (23, 2, 144), (24, 3, 144),
        (17, 2, 145), (18, 2, 145), (19, 2, 145), (20, 2, 145),
        (21, 2, 145), (22, 2, 145), (23, 2, 145), (24, 3, 145),
    ],
    // 状态 153
    [
        (17, 2, 148), (18, 2, 148), (19, 2, 148), (20, 2, 148),
        (21, 2, 148), (22, 2, 148), (23, 2, 148), (24, 3, 148),
        (17, 2, 159), (18, 2, 159), (19, 2, 159), (20, 2, 159),
        (21, 2, 159), (22, 2, 159), (23, 2, 159), (24, 3, 159),
    ],
    // 状态 154
    [
        (17, 2, 171), (18, 2, 171), (19, 2, 171), (20, 2, 171),
        (21, 2, 171), (22, 2, 171), (23, 2, 171), (24, 3, 171),
        (17, 2, 206), (18, 2, 206), (19, 2, 206), (20, 2, 206),
        (21, 2, 206), (22, 2, 206), (23, 2, 206), (24, 3, 206),
    ],
    // 状态 155
    [
        (17, 2, 215), (18, 2, 215), (19, 2, 215), (20, 2, 215),
        (21, 2, 215), (22, 2, 215), (23, 2, 215), (24, 3, 215),
        (17, 2, 225), (18, 2, 225), (19, 2, 225), (20, 2, 225),
        (21, 2, 225), (22, 2, 225), (23, 2, 225), (24, 3, 225),
    ],
    // 状态 156
    [
        (17, 2, 236), (18, 2, 236), (19, 2, 236), (20, 2, 236),
        (21, 2, 236), (22, 2, 236), (23, 2, 236), (24, 3, 236),
        (17, 2, 237), (18, 2, 237), (19, 2, 237), (20, 2, 237),
        (21, 2, 237), (22, 2, 237), (23, 2, 237), (24, 3, 237),
    ],
    // 状态 157
    [
        (25, 2, 199), (26, 2, 199), (27, 2, 199), (28, 3, 199),
        (25, 2, 207), (26, 2, 207), (27, 2, 207), (28, 3, 207),
        (25, 2, 234), (26, 2, 234), (27, 2, 234), (28, 3, 234),
        (25, 2, 235), (26, 2, 235), (27, 2, 235), (28, 3, 235),
    ],
    // 状态 158
    [
        (29, 2, 192), (30, 3, 192), (29, 2, 193), (30, 3, 193),
        (29, 2, 200), (30, 3, 200), (29, 2, 201), (30, 3, 201),
        (29, 2, 202), (30, 3, 202), (29, 2, 205), (30, 3, 205),
        (29, 2, 210), (30, 3, 210), (29, 2, 213), (30, 3, 213),
    ],
    // 状态 159
    [
        (29, 2, 218), (30, 3, 218), (29, 2, 219), (30, 3, 219),
        (29, 2, 238), (30, 3, 238), (29, 2, 240), (30, 3, 240),
        (29, 2, 242), (30, 3, 242), (29, 2, 243), (30, 3, 243),
        (29, 2, 255), (30, 3, 255), (0, 3, 203), (0, 3, 204),
    ],
    // 状态 160
    [
        (0, 3, 211), (0, 3, 212), (0, 3, 214), (0, 3, 221),
        (0, 3, 222), (0, 3, 223), (0, 3, 241), (0, 3, 244),
        (0, 3, 245), (0, 3, 246), (0, 3, 247), (0, 3, 248),
        (0, 3, 250), (0, 3, 251), (0, 3, 252), (0, 3, 253),
    ],
    // 状态 161
    [
        (0, 3, 254), (206, 0, 0), (207, 0, 0), (208, 0, 0),
        (209, 0, 0), (210, 0, 0), (211, 0, 0), (212, 0, 0),
        (213, 0, 0), (214, 0, 0), (215, 0, 0), (216, 0, 0),
        (217, 0, 0), (218, 0, 0), (219, 0, 0), (220, 0, 0),
    ],
    // 状态 162
    [
        (17, 2, 1), (18, 2, 1), (19, 2, 1), (20, 2, 1),
        (21, 2, 1), (22, 2, 1), (23, 2, 1), (24, 3, 1),
        (17, 2, 135), (18, 2, 135), (19, 2, 135), (20, 2, 135),
        (21, 2, 135), (22, 2, 135), (23, 2, 135), (24, 3, 135),
    ],
    // 状态 163
    [
        (17, 2, 137), (18, 2, 137), (19, 2, 137), (20, 2, 137),
        (21, 2, 137), (22, 2, 137), (23, 2, 137), (24, 3, 137),
        (17, 2, 138), (18, 2, 138), (19, 2, 138), (20, 2, 138),
        (21, 2, 138), (22, 2, 138), (23, 2, 138), (24, 3, 138),
    ],
    // 状态 164
    [
        (17, 2, 139), (18, 2, 139), (19, 2, 139), (20, 2, 139),
        (21, 2, 139), (22, 2, 139), (23, 2, 139), (24, 3, 139),
        (17, 2, 140), (18, 2, 140), (19, 2, 140), (20, 2, 140),
        (21, 2, 140), (22, 2, 140), (23, 2, 140), (24, 3, 140),
    ],
    // 状态 165
    [
        (17, 2, 141), (18, 2, 141), (19, 2, 141), (20, 2, 141),
        (21, 2, 141), (22, 2, 141), (23, 2, 141), (24, 3, 141),
        (17, 2, 143), (18, 2, 143), (19, 2, 143), (20, 2, 143),
        (21, 2, 143), (22, 2, 143), (23, 2, 143), (24, 3, 143),
    ],
    // 状态 166
    [
        (17, 2, 147), (18, 2, 147), (19, 2, 147), (20, 2, 147),
        (21, 2, 147), (22, 2, 147), (23, 2, 147), (24, 3, 147),
        (17, 2, 149), (18, 2, 149), (19, 2, 149), (20, 2, 149),
        (21, 2, 149), (22, 2, 149), (23, 2, 149), (24, 3, 149),
    ],
    // 状态 167
    [
        (17, 2, 150), (18, 2, 150), (19, 2, 150), (20, 2, 150),
        (21, 2, 150), (22, 2, 150), (23, 2, 150), (24, 3, 150),
        (17, 2, 151), (18, 2, 151), (19, 2, 151), (20, 2, 151),
        (21, 2, 151), (22, 2, 151), (23, 2, 151), (24, 3, 151),
    ],
    // 状态 168
    [
        (17, 2, 152), (18, 2, 152), (19, 2, 152), (20, 2, 152),
        (21, 2, 152), (22, 2, 152), (23, 2, 152), (24, 3, 152),
        (17, 2, 155), (18, 2, 155), (19, 2, 155), (20, 2, 155),
        (21, 2, 155), (22, 2, 155), (23, 2, 155), (24, 3, 155),
    ],
    // 状态 169
    [
        (17, 2, 157), (18, 2, 157), (19, 2, 157), (20, 2, 157),
        (21, 2, 157), (22, 2, 157), (23, 2, 157), (24, 3, 157),
        (17, 2, 158), (18, 2, 158), (19, 2, 158), (20, 2, 158),
        (21, 2, 158), (22, 2, 158), (23, 2, 158), (24, 3, 158),
    ],
    // 状态 170
    [
        (17, 2, 165), (18, 2, 165), (19, 2, 165), (20, 2, 165),
        (21, 2, 165), (22, 2, 165), (23, 2, 165), (24, 3, 165),
        (17, 2, 166), (18, 2, 166), (19, 2, 166), (20, 2, 166),
        (21, 2, 166), (22, 2, 166), (23, 2, 166), (24, 3, 166),
    ],
    // 状态 171
    [
        (17, 2, 168), (18, 2, 168), (19, 2, 168), (20, 2, 168),
        (21, 2, 168), (22, 2, 168), (23, 2, 168), (24, 3, 168),
        (17, 2, 174), (18, 2, 174), (19, 2, 174), (20, 2, 174),
        (21, 2, 174), (22, 2, 174), (23, 2, 174), (24, 3, 174),
    ],
    // 状态 172
    [
        (17, 2, 175), (18, 2, 175), (19, 2, 175), (20, 2, 175),
        (21, 2, 175), (22, 2, 175), (23, 2, 175), (24, 3, 175),
        (17, 2, 180), (18, 2, 180), (19, 2, 180), (20, 2, 180),
        (21, 2, 180), (22, 2, 180), (23, 2, 180), (24, 3, 180),
    ],
    // 状态 173
    [
        (17, 2, 182), (18, 2, 182), (19, 2, 182), (20, 2, 182),
        (21, 2, 182), (22, 2, 182), (23, 2, 182), (24, 3, 182),
        (17, 2, 183), (18, 2, 183), (19, 2, 183), (20, 2, 183),
        (21, 2, 183), (22, 2, 183), (23, 2, 183), (24, 3, 183),
    ],
    // 状态 174
    [
        (17, 2, 188), (18, 2, 188), (19, 2, 188), (20, 2, 188),
        (21, 2, 188), (22, 2, 188), (23, 2, 188), (24, 3, 188),
        (17, 2, 191), (18, 2, 191), (19, 2, 191), (20, 2, 191),
        (21, 2, 191), (22, 2, 191), (23, 2, 191), (24, 3, 191),
    ],
    // 状态 175
    [
        (17, 2, 197), (18, 2, 197), (19, 2, 197), (20, 2, 197),
        (21, 2, 197), (22, 2, 197), (23, 2, 197), (24, 3, 197),
        (17, 2, 231), (18, 2, 231), (19, 2, 231), (20, 2, 231),
        (21, 2, 231), (22, 2, 231), (23, 2, 231), (24, 3, 231),
    ],
    // 状态 176
    [
        (17, 2, 239), (18, 2, 239), (19, 2, 239), (20, 2, 239),
        (21, 2, 239), (22, 2, 239), (23, 2, 239), (24, 3, 239),
        (25, 2, 9), (26, 2, 9), (27, 2, 9), (28, 3, 9),
        (25, 2, 142), (26, 2, 142), (27, 2, 142), (28, 3, 142),
    ],
    // 状态 177
    [
        (25, 2, 144), (26, 2, 144), (27, 2, 144), (28, 3, 144),
        (25, 2, 145), (26, 2, 145), (27, 2, 145), (28, 3, 145),
        (25, 2, 148), (26, 2, 148), (27, 2, 148), (28, 3, 148),
        (25, 2, 159), (26, 2, 159), (27, 2, 159), (28, 3, 159),
    ],
    // 状态 178
    [
        (25, 2, 171), (26, 2, 171), (27, 2, 171), (28, 3, 171),
        (25, 2, 206), (26, 2, 206), (27, 2, 206), (28, 3, 206),
        (25, 2, 215), (26, 2, 215), (27, 2, 215), (28, 3, 215),
        (25, 2, 225), (26, 2, 225), (27, 2, 225), (28, 3, 225),
    ],
    // 状态 179
    [
        (25, 2, 236), (26, 2, 236), (27, 2, 236), (28, 3, 236),
        (25, 2, 237), (26, 2, 237), (27, 2, 237), (28, 3, 237),
        (29, 2, 199), (30, 3, 199), (29, 2, 207), (30, 3, 207),
        (29, 2, 234), (30, 3, 234), (29, 2, 235), (30, 3, 235),
    ],
    // 状态 180
    [
        (0, 3, 192), (0, 3, 193), (0, 3, 200), (0, 3, 201),
        (0, 3, 202), (0, 3, 205), (0, 3, 210), (0, 3, 213),
        (0, 3, 218), (0, 3, 219), (0, 3, 238), (0, 3, 240),
        (0, 3, 242), (0, 3, 243), (0, 3, 255), (221, 0, 0),
    ],
    // 状态 181
    [
        (222, 0, 0), (223, 0, 0), (224, 0, 0), (225, 0, 0),
        (226, 0, 0), (227, 0, 0), (228, 0, 0), (229, 0, 0),
        (230, 0, 0), (231, 0, 0), (232, 0, 0), (233, 0, 0),
        (234, 0, 0), (235, 0, 0), (236, 0, 0), (237, 0, 0),
    ],
    // 状态 182
    [
        (17, 2, 129), (18, 2, 129), (19, 2, 129), (20, 2, 129),
        (21, 2, 129), (22, 2, 129), (23, 2, 129), (24, 3, 129),
        (17, 2, 132), (18, 2, 132), (19, 2, 132), (20, 2, 132),
        (21, 2, 132), (22, 2, 132), (23, 2, 132), (24, 3, 132),
    ],
    // 状态 183
    [
        (17, 2, 133), (18, 2, 133), (19, 2, 133), (20, 2, 133),
        (21, 2, 133), (22, 2, 133), (23, 2, 133), (24, 3, 133),
        (17, 2, 134), (18, 2, 134), (19, 2, 134), (20, 2, 134),
        (21, 2, 134), (22, 2, 134), (23, 2, 134), (24, 3, 134),
    ],
    // 状态 184
    [
        (17, 2, 136), (18, 2, 136), (19, 2, 136), (20, 2, 136),
        (21, 2, 136), (22, 2, 136), (23, 2, 136), (24, 3, 136),
        (17, 2, 146), (18, 2, 146), (19, 2, 146), (20, 2, 146),
        (21, 2, 146), (22, 2, 146), (23, 2, 146), (24, 3, 146),
    ],
    // 状态 185
    [
        (17, 2, 154), (18, 2, 154), (19, 2, 154), (20, 2, 154),
        (21, 2, 154), (22, 2, 154), (23, 2, 154), (24, 3, 154),
        (17, 2, 156), (18, 2, 156), (19, 2, 156), (20, 2, 156),
        (21, 2, 156), (22, 2, 156), (23, 2, 156), (24, 3, 156),
    ],
    // 状态 186
    [
        (17, 2, 160), (18, 2, 160), (19, 2, 160), (20, 2, 160),
        (21, 2, 160), (22, 2, 160), (23, 2, 160), (24, 3, 160),
        (17, 2, 163), (18, 2, 163), (19, 2, 163), (20, 2, 163),
        (21, 2, 163), (22, 2, 163), (23, 2, 163), (24, 3, 163),
    ],
    // 状态 187
    [
        (17, 2, 164), (18, 2, 164), (19, 2, 164), (20, 2, 164),
        (21, 2, 164), (22, 2, 164), (23, 2, 164), (24, 3, 164),
        (17, 2, 169), (18, 2, 169), (19, 2, 169), (20, 2, 169),
        (21, 2, 169), (22, 2, 169), (23, 2, 169), (24, 3, 169),
    ],
    // 状态 188
    [
        (17, 2, 170), (18, 2, 170), (19, 2, 170), (20, 2, 170),
        (21, 2, 170), (22, 2, 170), (23, 2, 170), (24, 3, 170),
        (17, 2, 173), (18, 2, 173), (19, 2, 173), (20, 2, 173),
        (21, 2, 173), (22, 2, 173), (23, 2, 173), (24, 3, 173),
    ],
    // 状态 189
    [
        (17, 2, 178), (18, 2, 178), (19, 2, 178), (20, 2, 178),
        (21, 2, 178), (22, 2, 178), (23, 2, 178), (24, 3, 178),
        (17, 2, 181), (18, 2, 181), (19, 2, 181), (20, 2, 181),
        (21, 2, 181), (22, 2, 181), (23, 2, 181), (24, 3, 181),
    ],
    // 状态 190
    [
        (17, 2, 185), (18, 2, 185), (19, 2, 185), (20, 2, 185),
        (21, 2, 185), (22, 2, 185), (23, 2, 185), (24, 3, 185),
        (17, 2, 186), (18, 2, 186), (19, 2, 186), (20, 2, 186),
        (21, 2, 186), (22, 2, 186), (23, 2, 186), (24, 3, 186),
    ],
    // 状态 191
    [
        (17, 2, 187), (18, 2, 187), (19, 2, 187), (20, 2, 187),
        (21, 2, 187), (22, 2, 187), (23, 2, 187), (24, 3, 187),
        (17, 2, 189), (18, 2, 189), (19, 2, 189), (20, 2, 189),
        (21, 2, 189), (22, 2, 189), (23, 2, 189), (24, 3, 189),
    ],
    // 状态 192
    [
        (17, 2, 190), (18, 2, 190), (19, 2, 190), (20, 2, 190),
        (21, 2, 190), (22, 2, 190), (23, 2, 190), (24, 3, 190),
        (17, 2, 196), (18, 2, 196), (19, 2, 196), (20, 2, 196),
        (21, 2, 196), (22, 2, 196), (23, 2, 196), (24, 3, 196),
    ],
    // 状态 193
    [
        (17, 2, 198), (18, 2, 198), (19, 2, 198), (20, 2, 198),
        (21, 2, 198), (22, 2, 198), (23, 2, 198), (24, 3, 198),
        (17, 2, 228), (18, 2, 228), (19, 2, 228), (20, 2, 228),
        (21, 2, 228), (22, 2, 228), (23, 2, 228), (24, 3, 228),
    ],
    // 状态 194
    [
        (17, 2, 232), (18, 2, 232), (19, 2, 232), (20, 2, 232),
        (21, 2, 232), (22, 2, 232), (23, 2, 232), (24, 3, 232),
        (17, 2, 233), (18, 2, 233), (19, 2, 233), (20, 2, 233),
        (21, 2, 233), (22, 2, 233), (23, 2, 233), (24, 3, 233),
    ],
    // 状态 195
    [
        (25, 2, 1), (26, 2, 1), (27, 2, 1), (28, 3, 1),
        (25, 2, 135), (26, 2, 135), (27, 2, 135), (28, 3, 135),
        (25, 2, 137), (26, 2, 137), (27, 2, 137), (28, 3, 137),
        (25, 2, 138), (26, 2, 138), (27, 2, 138), (28, 3, 138),
    ],
    // 状态 196
    [
        (25, 2, 139), (26, 2, 139), (27, 2, 139), (28, 3, 139),
        (25, 2, 140), (26, 2, 140), (27, 2, 140), (28, 3, 140),
        (25, 2, 141), (26, 2, 141), (27, 2, 141), (28, 3, 141),
        (25, 2, 143), (26, 2, 143), (27, 2, 143), (28, 3, 143),
    ],
    // 状态 197
    [
        (25, 2, 147), (26, 2, 147), (27, 2, 147), (28, 3, 147),
        (25, 2, 149), (26, 2, 149), (27, 2, 149), (28, 3, 149),
        (25, 2, 150), (26, 2, 150), (27, 2, 150), (28, 3, 150),
        (25, 2, 151), (26, 2, 151), (27, 2, 151), (28, 3, 151),
    ],
    // 状态 198
    [
        (25, 2, 152), (26, 2, 152), (27, 2, 152), (28, 3, 152),
        (25, 2, 155), (26, 2, 155), (27, 2, 155), (28, 3, 155),
        (25, 2, 157), (26, 2, 157), (27, 2, 157), (28, 3, 157),
        (25, 2, 158), (26, 2, 158), (27, 2, 158), (28, 3, 158),
    ],
    // 状态 199
    [
        (25, 2, 165), (26, 2, 165), (27, 2, 165), (28, 3, 165),
        (25, 2, 166), (26, 2, 166), (27, 2, 166), (28, 3, 166),
        (25, 2, 168), (26, 2, 168), (27, 2, 168), (28, 3, 168),
        (25, 2, 174), (26, 2, 174), (27, 2, 174), (28, 3, 174),
    ],
    // 状态 200
    [
        (25, 2, 175), (26, 2, 175), (27, 2, 175), (28, 3, 175),
        (25, 2, 180), (26, 2, 180), (27, 2, 180), (28, 3, 180),
        (25, 2, 182), (26, 2, 182), (27, 2, 182), (28, 3, 182),
        (25, 2, 183), (26, 2, 183), (27, 2, 183), (28, 3, 183),
    ],
    // 状态 201
    [
        (25, 2, 188), (26, 2, 188), (27, 2, 188), (28, 3, 188),
        (25, 2, 191), (26, 2, 191), (27, 2, 191), (28, 3, 191),
        (25, 2, 197), (26, 2, 197), (27, 2, 197), (28, 3, 197),
        (25, 2, 231), (26, 2, 231), (27, 2, 231), (28, 3, 231),
    ],
    // 状态 202
    [
        (25, 2, 239), (26, 2, 239), (27, 2, 239), (28, 3, 239),
        (29, 2, 9), (30, 3, 9), (29, 2, 142), (30, 3, 142),
        (29, 2, 144), (30, 3, 144), (29, 2, 145), (30, 3, 145),
        (29, 2, 148), (30, 3, 148), (29, 2, 159), (30, 3, 159),
    ],
    // 状态 203
    [
        (29, 2, 171), (30, 3, 171), (29, 2, 206), (30, 3, 206),
        (29, 2, 215), (30, 3, 215), (29, 2, 225), (30, 3, 225),
        (29, 2, 236), (30, 3, 236), (29, 2, 237), (30, 3, 237),
        (0, 3, 199), (0, 3, 207), (0, 3, 234), (0, 3, 235),
    ],
    // 状态 204
    [
        (238, 0, 0), (239, 0, 0), (240, 0, 0), (241, 0, 0),
        (242, 0, 0), (243, 0, 0), (244, 0, 0), (245, 0, 0),
        (246, 0, 0), (247, 0, 0), (248, 0, 0), (249, 0, 0),
        (250, 0, 0), (251, 0, 0), (252, 0, 0), (253, 0, 0),
    ],
    // 状态 205
    [
        (25, 2, 10), (26, 2, 10), (27, 2, 10), (28, 3, 10),
        (25, 2, 13), (26, 2, 13), (27, 2, 13), (28, 3, 13),
        (25, 2, 22), (26, 2, 22), (27, 2, 22), (28, 3, 22),
        (0, 4, 0), (0, 4, 0), (0, 4, 0), (0, 4, 0),
    ],
    // 状态 206
    [
        (17, 2, 2), (18, 2, 2), (19, 2, 2), (20, 2, 2),
        (21, 2, 2), (22, 2, 2), (23, 2, 2), (24, 3, 2),
        (17, 2, 3), (18, 2, 3), (19, 2, 3), (20, 2, 3),
        (21, 2, 3), (22, 2, 3), (23, 2, 3), (24, 3, 3),
    ],
    // 状态 207
    [
        (17, 2, 4), (18, 2, 4), (19, 2, 4), (20, 2, 4),
        (21, 2, 4), (22, 2, 4), (23, 2, 4), (24, 3, 4),
        (17, 2, 5), (18, 2, 5), (19, 2, 5), (20, 2, 5),
        (21, 2, 5), (22, 2, 5), (23, 2, 5), (24, 3, 5),
    ],
    // 状态 208
    [
        (17, 2, 6), (18, 2, 6), (19, 2, 6), (20, 2, 6),
        (21, 2, 6), (22, 2, 6), (23, 2, 6), (24, 3, 6),
        (17, 2, 7), (18, 2, 7), (19, 2, 7), (20, 2, 7),
        (21, 2, 7), (22, 2, 7), (23, 2, 7), (24, 3, 7),
    ],
    // 状态 209
    [
        (17, 2, 8), (18, 2, 8), (19, 2, 8), (20, 2, 8),
        (21, 2, 8), (22, 2, 8), (23, 2, 8), (24, 3, 8),
        (17, 2, 11), (18, 2, 11), (19, 2, 11), (20, 2, 11),
        (21, 2, 11), (22, 2, 11), (23, 2, 11), (24, 3, 11),
    ],
    // 状态 210
    [
        (17, 2, 12), (18, 2, 12), (19, 2, 12), (20, 2, 12),
        (21, 2, 12), (22, 2, 12), (23, 2, 12), (24, 3, 12),
        (17, 2, 14), (18, 2, 14), (19, 2, 14), (20, 2, 14),
        (21, 2, 14), (22, 2, 14), (23, 2, 14), (24, 3, 14),
    ],
    // 状态 211
    [
        (17, 2, 15), (18, 2, 15), (19, 2, 15), (20, 2, 15),
        (21, 2, 15), (22, 2, 15), (23, 2, 15), (24, 3, 15),
        (17, 2, 16), (18, 2, 16), (19, 2, 16), (20, 2, 16),
        (21, 2, 16), (22, 2, 16), (23, 2, 16), (24, 3, 16),
    ],
    // 状态 212
    [
        (17, 2, 17), (18, 2, 17), (19, 2, 17), (20, 2, 17),
        (21, 2, 17), (22, 2, 17), (23, 2, 17), (24, 3, 17),
        (17, 2, 18), (18, 2, 18), (19, 2, 18), (20, 2, 18),
        (21, 2, 18), (22, 2, 18), (23, 2, 18), (24, 3, 18),
    ],
    // 状态 213
    [
        (17, 2, 19), (18, 2, 19), (19, 2, 19), (20, 2, 19),
        (21, 2, 19), (22, 2, 19), (23, 2, 19), (24, 3, 19),
        (17, 2, 20), (18, 2, 20), (19, 2, 20), (20, 2, 20),
        (21, 2, 20), (22, 2, 20), (23, 2, 20), (24, 3, 20),
    ],
    // 状态 214
    [
        (17, 2, 21), (18, 2, 21), (19, 2, 21), (20, 2, 21),
        (21, 2, 21), (22, 2, 21), (23, 2, 21), (24, 3, 21),
        (17, 2, 23), (18, 2, 23), (19, 2, 23), (20, 2, 23),
        (21, 2, 23), (22, 2, 23), (23, 2, 23), (24, 3, 23),
    ],
    // 状态 215
    [
        (17, 2, 24), (18, 2, 24), (19, 2, 24), (20, 2, 24),
        (21, 2, 24), (22, 2, 24), (23, 2, 24), (24, 3, 24),
        (17, 2, 25), (18, 2, 25), (19, 2, 25), (20, 2, 25),
        (21, 2, 25), (22, 2, 25), (23, 2, 25), (24, 3, 25),
    ],
    // 状态 216
    [
        (17, 2, 26), (18, 2, 26), (19, 2, 26), (20, 2, 26),
        (21, 2, 26), (22, 2, 26), (23, 2, 26), (24, 3, 26),
        (17, 2, 27), (18, 2, 27), (19, 2, 27), (20, 2, 27),
        (21, 2, 27), (22, 2, 27), (23, 2, 27), (24, 3, 27),
    ],
    // 状态 217
    [
        (17, 2, 28), (18, 2, 28), (19, 2, 28), (20, 2, 28),
        (21, 2, 28), (22, 2, 28), (23, 2, 28), (24, 3, 28),
        (17, 2, 29), (18, 2, 29), (19, 2, 29), (20, 2, 29),
        (21, 2, 29), (22, 2, 29), (23, 2, 29), (24, 3, 29),
    ],
    // 状态 218
    [
        (17, 2, 30), (18, 2, 30), (19, 2, 30), (20, 2, 30),
        (21, 2, 30), (22, 2, 30), (23, 2, 30), (24, 3, 30),
        (17, 2, 31), (18, 2, 31), (19, 2, 31), (20, 2, 31),
        (21, 2, 31), (22, 2, 31), (23, 2, 31), (24, 3, 31),
    ],
    // 状态 219
    [
        (17, 2, 127), (18, 2, 127), (19, 2, 127), (20, 2, 127),
        (21, 2, 127), (22, 2, 127), (23, 2, 127), (24, 3, 127),
        (17, 2, 220), (18, 2, 220), (19, 2, 220), (20, 2, 220),
        (21, 2, 220), (22, 2, 220), (23, 2, 220), (24, 3, 220),
    ],
    // 状态 220
    [
        (17, 2, 249), (18, 2, 249), (19, 2, 249), (20, 2, 249),
        (21, 2, 249), (22, 2, 249), (23, 2, 249), (24, 3, 249),
        (29, 2, 10), (30, 3, 10), (29, 2, 13), (30, 3, 13),
        (29, 2, 22), (30, 3, 22), (0, 4, 0), (0, 4, 0),
    ],
    // 状态 221
    [
        (17, 2, 203), (18, 2, 203), (19, 2, 203), (20, 2, 203),
        (21, 2, 203), (22, 2, 203), (23, 2, 203), (24, 3, 203),
        (17, 2, 204), (18, 2, 204), (19, 2, 204), (20, 2, 204),
        (21, 2, 204), (22, 2, 204), (23, 2, 204), (24, 3, 204),
    ],
    // 状态 222
    [
        (17, 2, 211), (18, 2, 211), (19, 2, 211), (20, 2, 211),
        (21, 2, 211), (22, 2, 211), (23, 2, 211), (24, 3, 211),
        (17, 2, 212), (18, 2, 212), (19, 2, 212), (20, 2, 212),
        (21, 2, 212), (22, 2, 212), (23, 2, 212), (24, 3, 212),
    ],
    // 状态 223
    [
        (17, 2, 214), (18, 2, 214), (19, 2, 214), (20, 2, 214),
        (21, 2, 214), (22, 2, 214), (23, 2, 214), (24, 3, 214),
        (17, 2, 221), (18, 2, 221), (19, 2, 221), (20, 2, 221),
        (21, 2, 221), (22, 2, 221), (23, 2, 221), (24, 3, 221),
    ],
    // 状态 224
    [
        (17, 2, 222), (18, 2, 222), (19, 2, 222), (20, 2, 222),
        (21, 2, 222), (22, 2, 222), (23, 2, 222), (24, 3, 222),
        (17, 2, 223), (18, 2, 223), (19, 2, 223), (20, 2, 223),
        (21, 2, 223), (22, 2, 223), (23, 2, 223), (24, 3, 223),
    ],
    // 状态 225
    [
        (17, 2, 241), (18, 2, 241), (19, 2, 241), (20, 2, 241),
        (21, 2, 241), (22, 2, 241), (23, 2, 241), (24, 3, 241),
        (17, 2, 244), (18, 2, 244), (19, 2, 244), (20, 2, 244),
        (21, 2, 244), (22, 2, 244), (23, 2, 244), (24, 3, 244),
    ],
    // 状态 226
    [
        (17, 2, 245), (18, 2, 245), (19, 2, 245), (20, 2, 245),
        (21, 2, 245), (22, 2, 245), (23, 2, 245), (24, 3, 245),
        (17, 2, 246), (18, 2, 246), (19, 2, 246), (20, 2, 246),
        (21, 2, 246), (22, 2, 246), (23, 2, 246), (24, 3, 246),
    ],
    // 状态 227
    [
        (17, 2, 247), (18, 2, 247), (19, 2, 247), (20, 2, 247),
        (21, 2, 247), (22, 2, 247), (23, 2, 247), (24, 3, 247),
        (17, 2, 248), (18, 2, 248), (19, 2, 248), (20, 2, 248),
        (21, 2, 248), (22, 2, 248), (23, 2, 248), (24, 3, 248),
    ],
    // 状态 228
    [
        (17, 2, 250), (18, 2, 250), (19, 2, 250), (20, 2, 250),
        (21, 2, 250), (22, 2, 250), (23, 2, 250), (24, 3, 250),
        (17, 2, 251), (18, 2, 251), (19, 2, 251), (20, 2, 251),
        (21, 2, 251), (22, 2, 251), (23, 2, 251), (24, 3, 251),
    ],
    // 状态 229
    [
        (17, 2, 252), (18, 2, 252), (19, 2, 252), (20, 2, 252),
        (21, 2, 252), (22, 2, 252), (23, 2, 252), (24, 3, 252),
        (17, 2, 253), (18, 2, 253), (19, 2, 253), (20, 2, 253),
        (21, 2, 253), (22, 2, 253), (23, 2, 253), (24, 3, 253),
    ],
    // 状态 230
    [
        (17, 2, 254), (18, 2, 254), (19, 2, 254), (20, 2, 254),
        (21, 2, 254), (22, 2, 254), (23, 2, 254), (24, 3, 254),
        (25, 2, 2), (26, 2, 2), (27, 2, 2), (28, 3, 2),
        (25, 2, 3), (26, 2, 3), (27, 2, 3), (28, 3, 3),
    ],
    // 状态 231
    [
        (25, 2, 4), (26, 2, 4), (27, 2, 4), (28, 3, 4),
        (25, 2, 5), (26, 2, 5), (27, 2, 5), (28, 3, 5),
        (25, 2, 6), (26, 2, 6), (27, 2, 6), (28, 3, 6),
        (25, 2, 7), (26, 2, 7), (27, 2, 7), (28, 3, 7),
    ],
    // 状态 232
    [
        (25, 2, 8), (26, 2, 8), (27, 2, 8), (28, 3, 8),
        (25, 2, 11), (26, 2, 11), (27, 2, 11), (28, 3, 11),
        (25, 2, 12), (26, 2, 12), (27, 2, 12), (28, 3, 12),
        (25, 2, 14), (26, 2, 14), (27, 2, 14), (28, 3, 14),
    ],
    // 状态 233
    [
        (25, 2, 15), (26, 2, 15), (27, 2, 15), (28, 3, 15),
        (25, 2, 16), (26, 2, 16), (27, 2, 16), (28, 3, 16),
        (25, 2, 17), (26, 2, 17), (27, 2, 17), (28, 3, 17),
        (25, 2, 18), (26, 2, 18), (27, 2, 18), (28, 3, 18),
    ],
    // 状态 234
    [
        (25, 2, 19), (26, 2, 19), (27, 2, 19), (28, 3, 19),
        (25, 2, 20), (26, 2, 20), (27, 2, 20), (28, 3, 20),
        (25, 2, 21), (26, 2, 21), (27, 2, 21), (28, 3, 21),
        (25, 2, 23), (26, 2, 23), (27, 2, 23), (28, 3, 23),
    ],
    // 状态 235
    [
        (25, 2, 24), (26, 2, 24), (27, 2, 24), (28, 3, 24),
        (25, 2, 25), (26, 2, 25), (27, 2, 25), (28, 3, 25),
        (25, 2, 26), (26, 2, 26), (27, 2, 26), (28, 3, 26),
        (25, 2, 27), (26, 2, 27), (27, 2, 27), (28, 3, 27),
    ],
    // 状态 236
    [
        (25, 2, 28), (26, 2, 28), (27, 2, 28), (28, 3, 28),
        (25, 2, 29), (26, 2, 29), (27, 2, 29), (28, 3, 29),
        (25, 2, 30), (26, 2, 30), (27, 2, 30), (28, 3, 30),
        (25, 2, 31), (26, 2, 31), (27, 2, 31), (28, 3, 31),
    ],
    // 状态 237
    [
        (25, 2, 127), (26, 2, 127), (27, 2, 127), (28, 3, 127),
        (25, 2, 220), (26, 2, 220), (27, 2, 220), (28, 3, 220),
        (25, 2, 249), (26, 2, 249), (27, 2, 249), (28, 3, 249),
        (0, 3, 10), (0, 3, 13), (0, 3, 22), (0, 4, 0),
    ],
    // 状态 238
    [
        (17, 2, 192), (18, 2, 192), (19, 2, 192), (20, 2, 192),
        (21, 2, 192), (22, 2, 192), (23, 2, 192), (24, 3, 192),
        (17, 2, 193), (18, 2, 193), (19, 2, 193), (20, 2, 193),
        (21, 2, 193), (22, 2, 193), (23, 2, 193), (24, 3, 193),
    ],
    // 状态 239
    [
        (17, 2, 200), (18, 2, 200), (19, 2, 200), (20, 2, 200),
        (21, 2, 200), (22, 2, 200), (23, 2, 200), (24, 3, 200),
        (17, 2, 201), (18, 2, 201), (19, 2, 201), (20, 2, 201),
        (21, 2, 201), (22, 2, 201), (23, 2, 201), (24, 3, 201),
    ],
    // 状态 240
    [
        (17, 2, 202), (18, 2, 202), (19, 2, 202), (20, 2, 202),
        (21, 2, 202), (22, 2, 202), (23, 2, 202), (24, 3, 202),
        (17, 2, 205), (18, 2, 205), (19, 2, 205), (20, 2, 205),
        (21, 2, 205), (22, 2, 205), (23, 2, 205), (24, 3, 205),
    ],
    // 状态 241
    [
        (17, 2, 210), (18, 2, 210), (19, 2, 210), (20, 2, 210),
        (21, 2, 210), (22, 2, 210), (23, 2, 210), (24, 3, 210),
        (17, 2, 213), (18, 2, 213), (19, 2, 213), (20, 2, 213),
        (21, 2, 213), (22, 2, 213), (23, 2, 213), (24, 3, 213),
    ],
    // 状态 242
    [
        (17, 2, 218), (18, 2, 218), (19, 2, 218), (20, 2, 218),
        (21, 2, 218), (22, 2, 218), (23, 2, 218), (24, 3, 218),
        (17, 2, 219), (18, 2, 219), (19, 2, 219), (20, 2, 219),
        (21, 2, 219), (22, 2, 219), (23, 2, 219), (24, 3, 219),
    ],
    // 状态 243
    [
        (17, 2, 238), (18, 2, 238), (19, 2, 238), (20, 2, 238),
        (21, 2, 238), (22, 2, 238), (23, 2, 238), (24, 3, 238),
        (17, 2, 240), (18, 2, 240), (19, 2, 240), (20, 2, 240),
        (21, 2, 240), (22, 2, 240), (23, 2, 240), (24, 3, 240),
    ],
    // 状态 244
    [
        (17, 2, 242), (18, 2, 242), (19, 2, 242), (20, 2, 242),
        (21, 2, 242), (22, 2, 242), (23, 2, 242), (24, 3, 242),
        (17, 2, 243), (18, 2, 243), (19, 2, 243), (20, 2, 243),
        (21, 2, 243), (22, 2, 243), (23, 2, 243), (24, 3, 243),
    ],
    // 状态 245
    [
        (17, 2, 255), (18, 2, 255), (19, 2, 255), (20, 2, 255),
        (21, 2, 255), (22, 2, 255), (23, 2, 255), (24, 3, 255),
        (25, 2, 203), (26, 2, 203), (27, 2, 203), (28, 3, 203),
        (25, 2, 204), (26, 2, 204), (27, 2, 204), (28, 3, 204),
    ],
    // 状态 246
    [
        (25, 2, 211), (26, 2, 211), (27, 2, 211), (28, 3, 211),
        (25, 2, 212), (26, 2, 212), (27, 2, 212), (28, 3, 212),
        (25, 2, 214), (26, 2, 214), (27, 2, 214), (28, 3, 214),
        (25, 2, 221), (26, 2, 221), (27, 2, 221), (28, 3, 221),
    ],
    // 状态 247
    [
        (25, 2, 222), (26, 2, 222), (27, 2, 222), (28, 3, 222),
        (25, 2, 223), (26, 2, 223), (27, 2, 223), (28, 3, 223),
        (25, 2, 241), (26, 2, 241), (27, 2, 241), (28, 3, 241),
        (25, 2, 244), (26, 2, 244), (27, 2, 244), (28, 3, 244),
    ],
    // 状态 248
    [
        (25, 2, 245), (26, 2, 245), (27, 2, 245), (28, 3, 245),
        (25, 2, 246), (26, 2, 246), (27, 2, 246), (28, 3, 246),
        (25, 2, 247), (26, 2, 247), (27, 2, 247), (28, 3, 247),
        (25, 2, 248), (26, 2, 248), (27, 2, 248), (28, 3, 248),
    ],
    // 状态 249
    [
        (25, 2, 250), (26, 2, 250), (27, 2, 250), (28, 3, 250),
        (25, 2, 251), (26, 2, 251), (27, 2, 251), (28, 3, 251),
        (25, 2, 252), (26, 2, 252), (27, 2, 252), (28, 3, 252),
        (25, 2, 253), (26, 2, 253), (27, 2, 253), (28, 3, 253),
    ],
    // 状态 250
    [
        (25, 2, 254), (26, 2, 254), (27, 2, 254), (28, 3, 254),
        (29, 2, 2), (30, 3, 2), (29, 2, 3), (30, 3, 3),
        (29, 2, 4), (30, 3, 4), (29, 2, 5), (30, 3, 5),
        (29, 2, 6), (30, 3, 6), (29, 2, 7), (30, 3, 7),
    ],
    // 状态 251
    [
        (29, 2, 8), (30, 3, 8), (29, 2, 11), (30, 3, 11),
        (29, 2, 12), (30, 3, 12), (29, 2, 14), (30, 3, 14),
        (29, 2, 15), (30, 3, 15), (29, 2, 16), (30, 3, 16),
        (29, 2, 17), (30, 3, 17), (29, 2, 18), (30, 3, 18),
    ],
    // 状态 252
    [
        (29, 2, 19), (30, 3, 19), (29, 2, 20), (30, 3, 20),
        (29, 2, 21), (30, 3, 21), (29, 2, 23), (30, 3, 23),
        (29, 2, 24), (30, 3, 24), (29, 2, 25), (30, 3, 25),
        (29, 2, 26), (30, 3, 26), (29, 2, 27), (30, 3, 27),
    ],
    // 状态 253
    [
        (29, 2, 28), (30, 3, 28), (29, 2, 29), (30, 3, 29),
        (29, 2, 30), (30, 3, 30), (29, 2, 31), (30, 3, 31),
        (29, 2, 127), (30, 3, 127), (29, 2, 220), (30, 3, 220),
        (29, 2, 249), (30, 3, 249), (254, 0, 0), (255, 0, 0),
    ],
    // 状态 254
    [
        (17, 2, 10), (18, 2, 10), (19, 2, 10), (20, 2, 10),
        (21, 2, 10), (22, 2, 10), (23, 2, 10), (24, 3, 10),
        (17, 2, 13), (18, 2, 13), (19, 2, 13), (20, 2, 13),
        (21, 2, 13), (22, 2, 13), (23, 2, 13), (24, 3, 13),
    ],
    // 状态 255
    [
        (17, 2, 22), (18, 2, 22), (19, 2, 22), (20, 2, 22),
        (21, 2, 22), (22, 2, 22), (23, 2, 22), (24, 3, 22),
        (0, 4, 0), (0, 4, 0), (0, 4, 0), (0, 4, 0),
        (0, 4, 0), (0, 4, 0), (0, 4, 0), (0, 4, 0),
    ],
];
