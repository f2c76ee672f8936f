// 素数判定 - 試し割り法による純粋関数

/// `n`が素数かどうかを判定する
///
/// `n <= 1`（負数を含む）はfalse。それ以外は`2..=floor(sqrt(n))`の
/// 範囲に約数が存在しない場合にtrueを返す。`n = 2`はループが空のため
/// そのままtrueになる。決定的・副作用なし・O(√n)。
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i: i64 = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// エラトステネスの篩 - 信頼できる参照実装
    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit + 1];
        is_prime[0] = false;
        if limit >= 1 {
            is_prime[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if is_prime[i] {
                let mut j = i * i;
                while j <= limit {
                    is_prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        is_prime
    }

    #[test]
    fn test_small_known_values() {
        assert!(!is_prime(-7));
        assert!(!is_prime(-1));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(9973));
        assert!(!is_prime(9999));
    }

    #[test]
    fn test_perfect_squares_are_composite() {
        // i*i <= n の境界条件の確認
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(9409)); // 97 * 97
    }

    #[test]
    fn test_matches_sieve_over_full_domain() {
        // 数学的な素数の定義（篩）と[-1000, 100000]で一致することを確認
        let reference = sieve(100_000);

        for n in -1000..0i64 {
            assert!(!is_prime(n), "負数 {n} は素数ではない");
        }
        for n in 0..=100_000i64 {
            assert_eq!(
                is_prime(n),
                reference[n as usize],
                "n = {n} で篩と不一致"
            );
        }
    }

    #[test]
    fn test_prime_count_up_to_10000() {
        let count = (1..=10_000).filter(|&n| is_prime(n)).count();
        assert_eq!(count, 1229);
    }
}
