#![allow(dead_code)]

use resinfo_probe_domain::ResolverAddress;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

pub const TYPE_TXT: u16 = 16;
pub const TYPE_RESINFO: u16 = 261;
pub const TYPE_CNAME: u16 = 5;

/// What the fake resolver sends back for every query it receives.
#[derive(Debug, Clone)]
pub struct Reply {
    pub answers: Vec<(u16, Vec<u8>)>,
    pub rcode: u8,
    pub truncated: bool,
    pub id_offset: u16,
}

impl Reply {
    pub fn answers(rtype: u16, rdatas: Vec<Vec<u8>>) -> Self {
        Self {
            answers: rdatas.into_iter().map(|r| (rtype, r)).collect(),
            rcode: 0,
            truncated: false,
            id_offset: 0,
        }
    }

    pub fn empty() -> Self {
        Self::answers(TYPE_RESINFO, Vec::new())
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::empty()
        }
    }

    pub fn with_answer(mut self, rtype: u16, rdata: Vec<u8>) -> Self {
        self.answers.push((rtype, rdata));
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    /// Answer with an ID that does not match the query.
    pub fn wrong_id(mut self) -> Self {
        self.id_offset = 1;
        self
    }
}

/// RDATA of a TXT record: length-prefixed character-strings.
pub fn txt_rdata(strings: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    for s in strings {
        out.push(s.len() as u8);
        out.extend_from_slice(s.as_bytes());
    }
    out
}

/// Build a response to `query` carrying the answers of `reply`.
///
/// The question section is copied from the query; every answer owner name
/// is a compression pointer to it.
pub fn build_response(query: &[u8], reply: &Reply) -> Vec<u8> {
    let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(reply.id_offset);
    let mut flags: u16 = 0x8180 | u16::from(reply.rcode & 0x0f);
    if reply.truncated {
        flags |= 0x0200;
    }

    let mut out = Vec::with_capacity(512);
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&flags.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&(reply.answers.len() as u16).to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&query[12..question_end(query)]);

    for (rtype, rdata) in &reply.answers {
        out.extend_from_slice(&[0xc0, 0x0c]);
        out.extend_from_slice(&rtype.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&300u32.to_be_bytes());
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(rdata);
    }
    out
}

fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += query[pos] as usize + 1;
    }
    pos + 1 + 4
}

/// A loopback UDP socket answering every query with a canned reply.
pub struct FakeResolver {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeResolver {
    pub async fn start(reply: Reply) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let response = build_response(&buf[..len], &reply);
                let _ = socket.send_to(&response, peer).await;
            }
        });

        Self { addr, handle }
    }

    /// Bound but never answers.
    pub async fn silent() -> (Self, UdpSocket) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let handle = tokio::spawn(async {});
        (Self { addr, handle }, socket)
    }

    pub fn address(&self) -> ResolverAddress {
        ResolverAddress::from(self.addr)
    }
}

impl Drop for FakeResolver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
