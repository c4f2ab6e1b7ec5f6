//! Comparison-based sorts.
//!
//! Every function copies its input into a private working vector and returns
//! the sorted copy; the caller's slice is never touched. Elements only need
//! `PartialOrd`: pairs that do not compare (e.g. `NaN`) are never swapped, so
//! every routine still terminates.

/// Classic O(n²) bubble sort, stopping after the first pass with no swap
pub fn bubble_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    arr
}

/// Functional quicksort: middle element as pivot, three-way partition.
///
/// Elements equal to the pivot (or unordered with it) land in the middle
/// bucket and are never recursed into, so runs of duplicates cost one pass.
pub fn quick_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let pivot = &data[data.len() / 2];
    let mut less = Vec::new();
    let mut middle = Vec::new();
    let mut greater = Vec::new();

    for x in data {
        if x < pivot {
            less.push(x.clone());
        } else if x > pivot {
            greater.push(x.clone());
        } else {
            middle.push(x.clone());
        }
    }

    let mut out = quick_sort(&less);
    out.extend(middle);
    out.extend(quick_sort(&greater));
    out
}

/// Top-down merge sort. Stable: on a tie the left element is taken first.
pub fn merge_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);

    let mut merged = Vec::with_capacity(data.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

pub fn selection_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
    }
    arr
}

/// Stable in-place insertion sort on the working copy
pub fn insertion_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    insertion_sort_in_place(&mut arr);
    arr
}

#[inline]
pub(crate) fn insertion_sort_in_place<T: PartialOrd>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Heap sort - build a max heap, then repeatedly move the root to the end
pub fn heap_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();
    if n <= 1 {
        return arr;
    }

    // Build max heap
    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i);
    }

    // Extract elements from heap
    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify(&mut arr, i, 0);
    }
    arr
}

#[inline]
fn heapify<T: PartialOrd>(data: &mut [T], n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && data[left] > data[largest] {
        largest = left;
    }
    if right < n && data[right] > data[largest] {
        largest = right;
    }

    if largest != i {
        data.swap(i, largest);
        heapify(data, n, largest);
    }
}

/// Shell sort with the halving gap sequence n/2, n/4, ..., 1
pub fn shell_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    arr
}

/// Comb sort. The gap shrinks by 1.3 each pass; once it reaches 1 the
/// passes continue until one completes without a swap.
pub fn comb_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();
    if n <= 1 {
        return arr;
    }

    let mut gap = n;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = (gap * 10 / 13).max(1);
        swapped = false;
        for i in 0..n - gap {
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                swapped = true;
            }
        }
    }
    arr
}

/// Bidirectional bubble sort (a.k.a. shaker sort)
pub fn cocktail_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();
    if n <= 1 {
        return arr;
    }

    let mut start = 0;
    let mut end = n - 1;
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in start..end {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        // Largest element is now at `end`
        end -= 1;
        swapped = false;
        for i in (start..end).rev() {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        start += 1;
    }
    arr
}

pub fn gnome_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut arr = data.to_vec();
    let n = arr.len();
    let mut i = 1;

    while i < n {
        if arr[i - 1] > arr[i] {
            arr.swap(i - 1, i);
            if i > 1 {
                i -= 1;
            }
        } else {
            i += 1;
        }
    }
    arr
}
