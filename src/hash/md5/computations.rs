pub use super::{K, S};

/// First-pass function: selects `c` where `b` is set and `d` elsewhere.
#[inline(always)]
pub fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

/// Second-pass function: selects `b` where `d` is set and `c` elsewhere.
#[inline(always)]
pub fn g(b: u32, c: u32, d: u32) -> u32 {
    (d & b) | (!d & c)
}

#[inline(always)]
pub fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Returns the boolean function output and message word index for round `i`.
#[inline(always)]
pub fn schedule(round: usize, b: u32, c: u32, d: u32) -> (u32, usize) {
    match round / 16 {
        0 => (f(b, c, d), round),
        1 => (g(b, c, d), (5 * round + 1) & 15),
        2 => (h(b, c, d), (3 * round + 5) & 15),
        _ => (i(b, c, d), (7 * round) & 15),
    }
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 4], m: [u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    for round in 0..64 {
        let (mixed, g) = schedule(round, b, c, d);

        let t = mixed
            .wrapping_add(a)
            .wrapping_add(K[round])
            .wrapping_add(m[g]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(t.rotate_left(S[round]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 4], m: [u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    macro_rules! R {
        ($i:expr) => {{
            let (mixed, g) = schedule($i, b, c, d);

            let t = mixed
                .wrapping_add(a)
                .wrapping_add(K[$i])
                .wrapping_add(m[g]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(t.rotate_left(S[$i]));
        }};
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);
    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
    R!(24);
    R!(25);
    R!(26);
    R!(27);
    R!(28);
    R!(29);
    R!(30);
    R!(31);

    R!(32);
    R!(33);
    R!(34);
    R!(35);
    R!(36);
    R!(37);
    R!(38);
    R!(39);
    R!(40);
    R!(41);
    R!(42);
    R!(43);
    R!(44);
    R!(45);
    R!(46);
    R!(47);

    R!(48);
    R!(49);
    R!(50);
    R!(51);
    R!(52);
    R!(53);
    R!(54);
    R!(55);
    R!(56);
    R!(57);
    R!(58);
    R!(59);
    R!(60);
    R!(61);
    R!(62);
    R!(63);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
