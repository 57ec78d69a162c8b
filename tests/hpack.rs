use hpackparse::{Binary, DecodeEvent, Decoder, Encoder, Field, HpackError};

/// 解完一个完整的块, 收集名值对
fn drain(decoder: &mut Decoder, mut input: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut fields = Vec::new();
    loop {
        match decoder.decode(&mut input, true).unwrap() {
            DecodeEvent::Field { field, .. } => {
                fields.push((field.name.to_vec(), field.value.to_vec()))
            }
            DecodeEvent::BlockEnd => break,
            DecodeEvent::MoreInput => unreachable!(),
        }
    }
    decoder.end_headers().unwrap();
    fields
}

fn fields_of(list: &[(&'static str, &'static str)]) -> Vec<Field> {
    list.iter()
        .map(|&(n, v)| Field::new(Binary::from(n), Binary::from(v)))
        .collect()
}

fn pairs_of(list: &[(&'static str, &'static str)]) -> Vec<(Vec<u8>, Vec<u8>)> {
    list.iter()
        .map(|&(n, v)| (n.as_bytes().to_vec(), v.as_bytes().to_vec()))
        .collect()
}

macro_rules! roundtrip {
    ($name:ident, $list:expr) => {
        #[test]
        fn $name() {
            let list: &[(&'static str, &'static str)] = &$list;
            let mut encoder = Encoder::new();
            let mut decoder = Decoder::new();
            let block = encoder.encode(&fields_of(list)).unwrap();
            assert_eq!(drain(&mut decoder, &block), pairs_of(list));
            assert_eq!(
                decoder.table().get_size(),
                encoder.table().get_size()
            );
        }
    };
}

roundtrip! {
    roundtrip_request,
    [
        (":method", "GET"),
        (":scheme", "http"),
        (":path", "/"),
        (":authority", "www.example.com"),
    ]
}

roundtrip! {
    roundtrip_custom_headers,
    [
        ("custom-key", "custom-header"),
        ("x-trace-id", "0af7651916cd43dd8448eb211c80319c"),
        ("custom-key", "custom-header"),
    ]
}

roundtrip! {
    roundtrip_credentials,
    [
        ("authorization", "Basic dXNlcjpwYXNz"),
        ("cookie", "a=1"),
        ("connection", "keep-alive"),
        ("te", "trailers"),
    ]
}

roundtrip! {
    roundtrip_empty_strings,
    [
        ("x-empty", ""),
        ("", "anonymous"),
    ]
}

roundtrip! {
    roundtrip_binary_values,
    [
        ("x-bin", "\u{1}\u{2}\u{3}\u{7f}"),
        ("x-long", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
    ]
}

/// 三个请求共用一条连接, 动态表跟随增长 (RFC 7541 C.3/C.4)
#[test]
fn request_sequence_shares_table() {
    let mut encoder = Encoder::new();
    let mut decoder = Decoder::new();

    let req1 = [
        (":method", "GET"),
        (":scheme", "http"),
        (":path", "/"),
        (":authority", "www.example.com"),
    ];
    let block = encoder.encode(&fields_of(&req1)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&req1));
    assert_eq!(decoder.table().get_size(), 57);
    assert_eq!(decoder.table().len(), 1);

    let req2 = [
        (":method", "GET"),
        (":scheme", "http"),
        (":path", "/"),
        (":authority", "www.example.com"),
        ("cache-control", "no-cache"),
    ];
    let block = encoder.encode(&fields_of(&req2)).unwrap();
    // 第二次编码更短, 大量命中索引
    assert!(block.len() < 15);
    assert_eq!(drain(&mut decoder, &block), pairs_of(&req2));
    assert_eq!(decoder.table().get_size(), 110);

    let req3 = [
        (":method", "GET"),
        (":scheme", "https"),
        (":path", "/index.html"),
        (":authority", "www.example.com"),
        ("custom-key", "custom-value"),
    ];
    let block = encoder.encode(&fields_of(&req3)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&req3));
    assert_eq!(decoder.table().get_size(), 164);
    assert_eq!(decoder.table().len(), 3);
}

/// 小容量下的淘汰序列 (RFC 7541 C.5, 容量256)
#[test]
fn response_sequence_with_eviction() {
    let mut encoder = Encoder::new();
    let mut decoder = Decoder::new();
    encoder.change_table_size(256);

    let resp1 = [
        (":status", "302"),
        ("cache-control", "private"),
        ("date", "Mon, 21 Oct 2013 20:13:21 GMT"),
        ("location", "https://www.example.com"),
    ];
    let block = encoder.encode(&fields_of(&resp1)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&resp1));
    assert_eq!(decoder.table().get_size(), 222);
    assert_eq!(decoder.table().len(), 4);

    // 302被307挤出后重新编码
    let resp2 = [
        (":status", "307"),
        ("cache-control", "private"),
        ("date", "Mon, 21 Oct 2013 20:13:21 GMT"),
        ("location", "https://www.example.com"),
    ];
    let block = encoder.encode(&fields_of(&resp2)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&resp2));
    assert_eq!(decoder.table().get_size(), 222);
    assert_eq!(decoder.table().len(), 4);

    let resp3 = [
        (":status", "200"),
        ("cache-control", "private"),
        ("date", "Mon, 21 Oct 2013 20:13:22 GMT"),
        ("location", "https://www.example.com"),
        ("content-encoding", "gzip"),
        (
            "set-cookie",
            "foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
        ),
    ];
    let block = encoder.encode(&fields_of(&resp3)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&resp3));
    assert_eq!(decoder.table().get_size(), 215);
    assert_eq!(decoder.table().len(), 3);

    let entries: Vec<(Vec<u8>, Vec<u8>)> = decoder
        .table()
        .iter()
        .map(|(n, v)| (n.to_vec(), v.to_vec()))
        .collect();
    assert_eq!(
        entries,
        pairs_of(&[
            (
                "set-cookie",
                "foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1"
            ),
            ("content-encoding", "gzip"),
            ("date", "Mon, 21 Oct 2013 20:13:22 GMT"),
        ])
    );
    // 编码端与解码端的动态表保持一致
    assert_eq!(encoder.table().get_size(), 215);
    assert_eq!(encoder.table().len(), 3);
}

/// 任意切分输入, 解码结果与一次性输入一致
#[test]
fn chunked_delivery_equivalence() {
    let reqs: [&[(&'static str, &'static str)]; 3] = [
        &[
            (":method", "GET"),
            (":scheme", "http"),
            (":path", "/"),
            (":authority", "www.example.com"),
        ],
        &[
            (":method", "GET"),
            (":path", "/"),
            ("cache-control", "no-cache"),
        ],
        &[
            (":method", "POST"),
            (":path", "/submit"),
            ("custom-key", "custom-value"),
        ],
    ];

    for chunk_size in [1usize, 2, 3, 7] {
        let mut encoder = Encoder::new();
        let mut whole = Decoder::new();
        let mut pieces = Decoder::new();
        for req in reqs.iter() {
            let block = encoder.encode(&fields_of(req)).unwrap();

            let expect = drain(&mut whole, &block);

            let mut got = Vec::new();
            let chunks: Vec<&[u8]> = block.as_slice().chunks(chunk_size).collect();
            for (i, chunk) in chunks.iter().enumerate() {
                let in_final = i == chunks.len() - 1;
                let mut chunk = *chunk;
                loop {
                    match pieces.decode(&mut chunk, in_final).unwrap() {
                        DecodeEvent::Field { field, .. } => {
                            got.push((field.name.to_vec(), field.value.to_vec()))
                        }
                        DecodeEvent::MoreInput | DecodeEvent::BlockEnd => break,
                    }
                }
            }
            pieces.end_headers().unwrap();

            assert_eq!(got, expect, "chunk_size={}", chunk_size);
            assert_eq!(pieces.table().get_size(), whole.table().get_size());
            assert_eq!(pieces.table().len(), whole.table().len());
        }
    }
}

/// 敏感头部往返后保持永不索引的标记
#[test]
fn sensitive_survives_roundtrip() {
    let mut encoder = Encoder::new();
    let mut decoder = Decoder::new();
    let f = Field::sensitive(Binary::from("x-api-key"), Binary::from("tops3cret"));
    let block = encoder.encode(&[f]).unwrap();
    let mut input = block.as_slice();
    match decoder.decode(&mut input, true).unwrap() {
        DecodeEvent::Field { field, .. } => {
            assert_eq!(field.name, "x-api-key");
            assert!(field.flags.is_sensitive());
        }
        _ => panic!("expected a field"),
    }
    assert_eq!(decoder.table().len(), 0);
    assert_eq!(encoder.table().len(), 0);
}

/// 协议错误之后上下文永久不可用
#[test]
fn poisoned_context_stays_poisoned() {
    let mut decoder = Decoder::new();
    let mut input = &[0x80u8][..];
    assert_eq!(
        decoder.decode(&mut input, true),
        Err(HpackError::InvalidIndex)
    );
    let mut input = &[0x82u8][..];
    assert_eq!(decoder.decode(&mut input, true), Err(HpackError::BadContext));
    assert_eq!(decoder.end_headers(), Err(HpackError::BadContext));
    assert_eq!(decoder.change_table_size(0), Err(HpackError::BadContext));
}

/// 表大小更新贯穿编码端与解码端
#[test]
fn table_size_update_roundtrip() {
    let mut encoder = Encoder::new();
    let mut decoder = Decoder::new();

    let req = [(":authority", "www.example.com"), ("user-agent", "curl/8")];
    let block = encoder.encode(&fields_of(&req)).unwrap();
    drain(&mut decoder, &block);
    assert_eq!(decoder.table().len(), 2);

    // 归零清空两侧动态表, 再恢复
    encoder.change_table_size(0);
    encoder.change_table_size(4096);
    let block = encoder.encode(&fields_of(&req)).unwrap();
    assert_eq!(drain(&mut decoder, &block), pairs_of(&req));
    assert_eq!(decoder.table().get_max_table_size(), 4096);
    assert_eq!(decoder.table().len(), 2);
    assert_eq!(encoder.table().len(), 2);
}
