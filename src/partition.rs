// Partitioner - 範囲の静的分割
// 起動時に一度だけ計算され、その後は変更されない（ワークスティーリングなし）

use crate::core::{PartitionStrategy, Range};

/// 範囲を`worker_count`個の連続したサブ範囲に分割する
///
/// `step = floor(len / worker_count)`として、ワーカー`i`は
/// `[start + i*step, start + (i+1)*step - 1]`を受け取る。
///
/// `Legacy`戦略ではこの式をそのまま使うため、範囲長がワーカー数で
/// 割り切れない場合は末尾の`len mod worker_count`個の値がどのサブ範囲
/// にも含まれない（旧来の固定分割が持つ既知の境界バグの再現）。
/// `FullCoverage`戦略では最後のワーカーのサブ範囲だけ`range.end`まで
/// 伸ばし、和集合が常に入力範囲と一致するようにする。
///
/// どちらの戦略でもサブ範囲は連続・互いに素。入力の検証は呼び出し側
/// （パイプライン）の責任。
pub fn partition(range: Range, worker_count: usize, strategy: PartitionStrategy) -> Vec<Range> {
    let step = (range.len() / worker_count as u64) as i64;

    (0..worker_count)
        .map(|i| {
            let sub_start = range.start + i as i64 * step;
            let sub_end = match strategy {
                PartitionStrategy::Legacy => sub_start + step - 1,
                PartitionStrategy::FullCoverage => {
                    if i == worker_count - 1 {
                        range.end
                    } else {
                        sub_start + step - 1
                    }
                }
            };
            Range::new(sub_start, sub_end)
        })
        .collect()
}
