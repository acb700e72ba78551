use log::debug;
use rayon::prelude::*;

/// Number of distinct symbols a byte can take.
pub const SYMBOLS: usize = 256;

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u32; SYMBOLS],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u32; SYMBOLS],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u32>>(),
            )
    } else {
        let mut freqs = vec![0_u32; SYMBOLS];
        for (i, &el) in data.iter().enumerate() {
            if i & 0xfff == 0 {
                debug!("Counting symbols - {}%", 100 * i / data.len());
            }
            freqs[el as usize] += 1;
        }
        freqs
    }
}

/// Number of symbols that occur at least once.
pub fn distinct(freqs: &[u32]) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abracadabra_test() {
        let f = freqs(b"abracadabra");
        assert_eq!(f[b'a' as usize], 5);
        assert_eq!(f[b'b' as usize], 2);
        assert_eq!(f[b'r' as usize], 2);
        assert_eq!(f[b'c' as usize], 1);
        assert_eq!(f[b'd' as usize], 1);
        assert_eq!(distinct(&f), 5);
        assert_eq!(f.iter().sum::<u32>(), 11);
    }

    #[test]
    fn empty_test() {
        let f = freqs(b"");
        assert_eq!(f.len(), SYMBOLS);
        assert_eq!(distinct(&f), 0);
    }

    #[test]
    fn parallel_matches_sequential_test() {
        let data: Vec<u8> = (0..200_000_u32).map(|i| (i * 7 % 251) as u8).collect();
        let big = freqs(&data);
        let mut small = vec![0_u32; SYMBOLS];
        data.chunks(50_000)
            .map(freqs)
            .for_each(|f| small.iter_mut().zip(f).for_each(|(a, b)| *a += b));
        assert_eq!(big, small);
        assert_eq!(big.iter().sum::<u32>(), 200_000);
    }
}
