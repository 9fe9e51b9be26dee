//! CertificateRequest send/recv between two endpoints.

use certreq::{
    recv, send, Buf, ClientCertificateType, Config, Error, HandshakeContext, HashAlgorithm,
    ProtocolVersion, SignatureAlgorithm, SignatureAndHashAlgorithm,
};

const RSA_SHA256: SignatureAndHashAlgorithm =
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::RSA);
const ECDSA_SHA256: SignatureAndHashAlgorithm =
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA);
const ECDSA_SHA384: SignatureAndHashAlgorithm =
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA);
const RSA_SHA1: SignatureAndHashAlgorithm =
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA1, SignatureAlgorithm::RSA);

fn config(
    types: &[ClientCertificateType],
    algorithms: &[SignatureAndHashAlgorithm],
) -> Config {
    Config::builder()
        .certificate_types(types.iter().copied())
        .signature_algorithms(algorithms.iter().copied())
        .build()
        .expect("valid config")
}

/// Run server `send` and return the bytes written.
fn server_send(server: &Config, version: ProtocolVersion) -> Vec<u8> {
    let mut ctx = HandshakeContext::new(version, Buf::with_capacity(1024));
    send(server, &mut ctx).expect("send");
    ctx.io.to_vec()
}

fn client_recv(
    client: &Config,
    version: ProtocolVersion,
    bytes: &[u8],
) -> (HandshakeContext, Result<(), Error>) {
    let mut ctx = HandshakeContext::new(version, Buf::from_slice(bytes));
    let r = recv(client, &mut ctx);
    (ctx, r)
}

#[test]
fn receiver_preference_decides() {
    let _ = env_logger::try_init();

    let server = config(
        &[ClientCertificateType::ECDSA_SIGN, ClientCertificateType::RSA_SIGN],
        &[ECDSA_SHA256, RSA_SHA256],
    );
    let client = config(
        &[ClientCertificateType::RSA_SIGN, ClientCertificateType::ECDSA_SIGN],
        &[RSA_SHA256, ECDSA_SHA256],
    );

    let bytes = server_send(&server, ProtocolVersion::TLS1_2);
    let (ctx, r) = client_recv(&client, ProtocolVersion::TLS1_2, &bytes);
    r.unwrap();

    // RSA comes first locally, even though the peer listed ECDSA first.
    assert_eq!(ctx.negotiated_signature_algorithm(), Some(SignatureAlgorithm::RSA));
    assert_eq!(ctx.negotiated_hash_algorithm(), Some(HashAlgorithm::SHA256));
    assert_eq!(
        ctx.peer_certificate_types(),
        Some(&[ClientCertificateType::ECDSA_SIGN, ClientCertificateType::RSA_SIGN][..])
    );
    assert_eq!(ctx.io.remaining(), 0);
}

#[test]
fn skips_pairs_peer_did_not_offer() {
    let _ = env_logger::try_init();

    let server = config(&[ClientCertificateType::ECDSA_SIGN], &[ECDSA_SHA384, ECDSA_SHA256]);
    let client = config(
        &[ClientCertificateType::ECDSA_SIGN],
        &[RSA_SHA256, ECDSA_SHA256, ECDSA_SHA384],
    );

    let bytes = server_send(&server, ProtocolVersion::TLS1_2);
    let (ctx, r) = client_recv(&client, ProtocolVersion::TLS1_2, &bytes);
    r.unwrap();
    assert_eq!(ctx.negotiated_signature_and_hash(), Some(ECDSA_SHA256));
}

#[test]
fn no_common_algorithm() {
    let _ = env_logger::try_init();

    let server = config(&[ClientCertificateType::ECDSA_SIGN], &[ECDSA_SHA256]);
    let client = config(&[ClientCertificateType::RSA_SIGN], &[RSA_SHA256, RSA_SHA1]);

    let bytes = server_send(&server, ProtocolVersion::TLS1_2);
    let (ctx, r) = client_recv(&client, ProtocolVersion::TLS1_2, &bytes);
    assert_eq!(r, Err(Error::NoCommonAlgorithm));
    assert_eq!(ctx.negotiated_signature_and_hash(), None);
}

#[test]
fn other_versions_have_no_signature_field() {
    let _ = env_logger::try_init();

    let server = Config::default();
    let client = Config::default();

    for version in [
        ProtocolVersion::SSLv3,
        ProtocolVersion::TLS1_0,
        ProtocolVersion::TLS1_1,
        ProtocolVersion::TLS1_3,
    ] {
        let bytes = server_send(&server, version);
        assert_eq!(
            bytes,
            [
                0x02, // Certificate types length
                0x01, 0x40, // RSA_SIGN, ECDSA_SIGN
                0x00, 0x00, // Certificate authorities length
            ]
        );

        let (ctx, r) = client_recv(&client, version, &bytes);
        r.unwrap();
        assert_eq!(ctx.negotiated_signature_and_hash(), None);
        assert_eq!(ctx.io.remaining(), 0);
    }
}

#[test]
fn other_versions_never_read_signature_field() {
    let _ = env_logger::try_init();

    // A TLS 1.2 body read as TLS 1.1: the signature list length 0x0008 is
    // taken as the authorities length.
    let bytes = server_send(&Config::default(), ProtocolVersion::TLS1_2);
    let (ctx, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_1, &bytes);
    assert_eq!(r, Err(Error::UnsupportedFeature("certificate authorities")));
    assert_eq!(ctx.io.read_position(), 1 + 2 + 2);
}

#[test]
fn authorities_must_be_empty() {
    let _ = env_logger::try_init();

    let client = Config::default();

    for len in [1u16, 5, 0xFFFF] {
        let mut bytes = vec![
            0x01, // Certificate types length
            0x01, // RSA_SIGN
            0x00, 0x02, // Signature algorithms length
            0x04, 0x03, // SHA256/ECDSA
        ];
        bytes.extend_from_slice(&len.to_be_bytes());
        let length_end = bytes.len();
        bytes.extend_from_slice(&[0x30; 8]);

        let (ctx, r) = client_recv(&client, ProtocolVersion::TLS1_2, &bytes);
        assert_eq!(r, Err(Error::UnsupportedFeature("certificate authorities")));
        assert_eq!(ctx.io.read_position(), length_end);
        assert_eq!(ctx.negotiated_signature_and_hash(), None);
    }
}

#[test]
fn empty_authorities_accepted() {
    let _ = env_logger::try_init();

    let bytes = [
        0x01, // Certificate types length
        0x01, // RSA_SIGN
        0x00, 0x02, // Signature algorithms length
        0x04, 0x01, // SHA256/RSA
        0x00, 0x00, // Certificate authorities length
    ];

    let (ctx, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_2, &bytes);
    r.unwrap();
    assert_eq!(ctx.negotiated_signature_and_hash(), Some(RSA_SHA256));
    assert_eq!(ctx.io.remaining(), 0);
}

#[test]
fn truncated_certificate_types() {
    let _ = env_logger::try_init();

    // Declares 4 types, 2 present, and nothing after.
    let short = [0x04, 0x01, 0x40];
    let (_, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_2, &short);
    assert_eq!(r, Err(Error::TruncatedInput));

    // Every strict prefix of a valid message is truncated.
    let bytes = server_send(&Config::default(), ProtocolVersion::TLS1_2);
    for end in 0..bytes.len() {
        let prefix = &bytes[..end];
        let (_, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_2, prefix);
        assert_eq!(r, Err(Error::TruncatedInput), "prefix of {} bytes", end);
    }
}

#[test]
fn unknown_codes_are_malformed() {
    let _ = env_logger::try_init();

    let bytes = [
        0x01, // Certificate types length
        0x63, // not a certificate type
        0x00, 0x02, // Signature algorithms length
        0x04, 0x01, // SHA256/RSA
        0x00, 0x00, // Certificate authorities length
    ];
    let (_, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_2, &bytes);
    assert!(matches!(r, Err(Error::MalformedMessage(_))));

    let bytes = [
        0x01, // Certificate types length
        0x01, // RSA_SIGN
        0x00, 0x02, // Signature algorithms length
        0x09, 0x01, // unknown hash/RSA
        0x00, 0x00, // Certificate authorities length
    ];
    let (_, r) = client_recv(&Config::default(), ProtocolVersion::TLS1_2, &bytes);
    assert!(matches!(r, Err(Error::MalformedMessage(_))));
}

#[test]
fn recv_is_deterministic() {
    let _ = env_logger::try_init();

    let bytes = server_send(&Config::default(), ProtocolVersion::TLS1_2);
    let client = config(&[ClientCertificateType::RSA_SIGN], &[RSA_SHA256, ECDSA_SHA256]);

    let copy = bytes.clone();
    let (a, ra) = client_recv(&client, ProtocolVersion::TLS1_2, &bytes);
    let (b, rb) = client_recv(&client, ProtocolVersion::TLS1_2, &copy);
    ra.unwrap();
    rb.unwrap();

    assert_eq!(a.negotiated_signature_and_hash(), b.negotiated_signature_and_hash());
    assert_eq!(a.peer_certificate_types(), b.peer_certificate_types());
}

#[test]
fn send_into_full_buffer() {
    let _ = env_logger::try_init();

    let needed = server_send(&Config::default(), ProtocolVersion::TLS1_2).len();

    let io = Buf::with_capacity(needed - 1);
    let mut ctx = HandshakeContext::new(ProtocolVersion::TLS1_2, io);
    assert_eq!(send(&Config::default(), &mut ctx), Err(Error::BufferFull));

    let mut ctx = HandshakeContext::new(ProtocolVersion::TLS1_2, Buf::with_capacity(needed));
    send(&Config::default(), &mut ctx).unwrap();
    assert_eq!(ctx.io.len(), needed);
}
