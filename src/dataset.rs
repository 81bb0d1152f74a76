//! Static checklist catalogs, one per language.
//!
//! The two catalogs are parallel: same category ids, same item ids, same
//! ordering. Item ids are unique across the whole checklist because the
//! audit reconciliation matches on id alone, globally.

use crate::types::{Category, ChecklistItem, Language, Priority};

fn item(id: &str, task: &str, description: &str, priority: Priority) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        task: task.to_string(),
        description: description.to_string(),
        priority,
        is_completed: false,
    }
}

fn category(id: &str, name: &str, items: Vec<ChecklistItem>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

/// The pristine checklist for `lang`, with every item incomplete.
/// Used on first launch, as the fallback for unreadable saved data, and by
/// reset.
pub fn default_checklist(lang: Language) -> Vec<Category> {
    match lang {
        Language::Ar => checklist_ar(),
        Language::En => checklist_en(),
    }
}

fn checklist_ar() -> Vec<Category> {
    use Priority::*;
    vec![
        category("foundation", "1. الأساسيات والزحف", vec![
            item("f-1", "تثبيت Google Analytics 4", "التأكد من جمع البيانات بشكل صحيح واستبعاد الزيارات الداخلية.", High),
            item("f-2", "إعداد Google Search Console", "التحقق من الملكية وربط خريطة الموقع (Sitemap).", High),
            item("f-3", "فحص ملف Robots.txt", "التأكد من عدم حظر صفحات هامة عن عناكب البحث.", High),
            item("f-4", "صلاحية خريطة الموقع (XML Sitemap)", "يجب أن تكون خالية من الأخطاء والروابط المعطلة.", High),
            item("f-5", "تفعيل بروتوكول HTTPS", "تشفير الموقع بشهادة SSL سارية المفعول.", High),
            item("f-6", "إصلاح أخطاء الزحف (Crawl Errors)", "مراجعة تقرير التغطية في GSC وإصلاح أخطاء 5xx.", High),
            item("f-7", "إعداد Bing Webmaster Tools", "لضمان الظهور في محرك بحث Bing و Yahoo.", Low),
        ]),
        category("technical", "2. السيو التقني (Technical)", vec![
            item("t-1", "تحسين سرعة الموقع (Core Web Vitals)", "تحقيق درجة نجاح في LCP, FID, CLS.", High),
            item("t-2", "التوافق مع الجوال (Mobile-Friendly)", "اختبار الموقع على شاشات مختلفة وإصلاح مشاكل اللمس.", High),
            item("t-3", "إصلاح الروابط المكسورة (404)", "عمل Redirect 301 للروابط القديمة أو حذفها.", Medium),
            item("t-4", "استخدام Canonical Tags", "منع المحتوى المكرر بتحديد الصفحة الأصلية.", High),
            item("t-5", "بنية الروابط (URL Structure)", "روابط قصيرة، مقروءة، وتحتوي على الكلمة المفتاحية.", Medium),
            item("t-6", "تفعيل Breadcrumbs", "لتحسين تجربة المستخدم وفهم جوجل لهيكلية الموقع.", Medium),
            item("t-7", "إعداد Schema Markup", "إضافة البيانات المنظمة (Organization, Product, Article).", Medium),
            item("t-8", "إصلاح سلاسل إعادة التوجيه (Redirect Chains)", "تجنب القفزات المتعددة (A > B > C).", Low),
        ]),
        category("onpage", "3. السيو الداخلي (On-Page)", vec![
            item("op-1", "عنوان الصفحة (Title Tag)", "فريد، جذاب، يبدأ بالكلمة المفتاحية (50-60 حرف).", High),
            item("op-2", "وصف الميتا (Meta Description)", "نص تسويقي محفز للنقر (CTR) يتضمن الكلمة المفتاحية.", Medium),
            item("op-3", "ترويسة H1 واحدة فقط", "يجب أن تحتوي كل صفحة على H1 واحد يعبر عن محتواها.", High),
            item("op-4", "تنسيق العناوين الفرعية (H2, H3)", "تقسيم المحتوى بشكل منطقي للقراء وعناكب البحث.", Medium),
            item("op-5", "النص البديل للصور (Alt Text)", "وصف الصور بكلمات دلالية لظهورها في بحث الصور.", Medium),
            item("op-6", "الربط الداخلي (Internal Linking)", "ربط الصفحات ذات الصلة ببعضها بـ Anchor Text وصفي.", High),
            item("op-7", "تحسين الصور (WebP & Compression)", "ضغط الصور لتقليل حجم الصفحة دون فقدان الجودة.", High),
        ]),
        category("content", "4. جودة المحتوى (Content)", vec![
            item("c-1", "بحث الكلمات المفتاحية", "استهداف كلمات ذات حجم بحث ونية واضحة.", High),
            item("c-2", "محتوى حصري (Originality)", "تجنب النسخ واللصق، وفحص المحتوى بأدوات كشف النسخ.", High),
            item("c-3", "تلبية نية البحث (Search Intent)", "هل المحتوى يجيب فعلاً على سؤال الباحث؟", High),
            item("c-4", "تحديث المحتوى القديم", "إضافة معلومات جديدة وتواريخ حديثة للمقالات القديمة.", Medium),
            item("c-5", "قابلية القراءة (Readability)", "فقرات قصيرة، قوائم نقطية، خط واضح.", Medium),
            item("c-6", "معايير E-E-A-T", "إظهار الخبرة، المصداقية، والموثوقية (صفحة من نحن، المؤلف).", Medium),
        ]),
        category("offpage", "5. السيو الخارجي والمحلي", vec![
            item("off-1", "Google My Business", "إنشاء وتوثيق وتحديث النشاط التجاري بالكامل.", High),
            item("off-2", "توحيد بيانات NAP", "الاسم، العنوان، والهاتف يجب أن يتطابقوا في كل الويب.", High),
            item("off-3", "تحليل ملف الروابط (Backlink Audit)", "التنصل من الروابط السامة (Disavow Toxic Links).", Medium),
            item("off-4", "بناء روابط الجودة", "الحصول على روابط من مواقع ذات صلة وسلطة عالية.", High),
            item("off-5", "الإشارات الاجتماعية", "ربط الموقع بحسابات التواصل الاجتماعي النشطة.", Low),
        ]),
    ]
}

fn checklist_en() -> Vec<Category> {
    use Priority::*;
    vec![
        category("foundation", "1. Fundamentals & Crawling", vec![
            item("f-1", "Setup Google Analytics 4", "Ensure data collection is correct and exclude internal traffic.", High),
            item("f-2", "Setup Google Search Console", "Verify ownership and submit your XML Sitemap.", High),
            item("f-3", "Check Robots.txt", "Ensure no important pages are blocked from search engines.", High),
            item("f-4", "XML Sitemap Validity", "Must be error-free and contain no 404 links.", High),
            item("f-5", "Enable HTTPS", "Encrypt website with a valid SSL certificate.", High),
            item("f-6", "Fix Crawl Errors", "Review coverage report in GSC and fix 5xx errors.", High),
            item("f-7", "Setup Bing Webmaster Tools", "Ensure visibility on Bing and Yahoo search engines.", Low),
        ]),
        category("technical", "2. Technical SEO", vec![
            item("t-1", "Improve Core Web Vitals", "Achieve passing scores in LCP, FID, and CLS.", High),
            item("t-2", "Mobile-Friendly Check", "Test on various screens and fix touch target issues.", High),
            item("t-3", "Fix Broken Links (404)", "301 Redirect old links or remove them.", Medium),
            item("t-4", "Use Canonical Tags", "Prevent duplicate content by defining the original page.", High),
            item("t-5", "URL Structure", "Short, readable URLs containing the target keyword.", Medium),
            item("t-6", "Enable Breadcrumbs", "Improve UX and help Google understand site structure.", Medium),
            item("t-7", "Setup Schema Markup", "Add structured data (Organization, Product, Article).", Medium),
            item("t-8", "Fix Redirect Chains", "Avoid multiple hops (A > B > C).", Low),
        ]),
        category("onpage", "3. On-Page SEO", vec![
            item("op-1", "Title Tag Optimization", "Unique, catchy, starts with keyword (50-60 chars).", High),
            item("op-2", "Meta Description", "Marketing copy stimulating CTR, includes keyword.", Medium),
            item("op-3", "Single H1 Tag", "Each page must have exactly one descriptive H1.", High),
            item("op-4", "Subheadings (H2, H3)", "Logically divide content for readers and crawlers.", Medium),
            item("op-5", "Image Alt Text", "Describe images with keywords for Image Search.", Medium),
            item("op-6", "Internal Linking", "Link related pages using descriptive Anchor Text.", High),
            item("op-7", "Image Optimization", "Compress images (WebP) to reduce load time.", High),
        ]),
        category("content", "4. Content Quality", vec![
            item("c-1", "Keyword Research", "Target keywords with sufficient volume and clear intent.", High),
            item("c-2", "Original Content", "Avoid copy-paste; use plagiarism checkers.", High),
            item("c-3", "Satisfy Search Intent", "Does the content actually answer the user query?", High),
            item("c-4", "Update Old Content", "Add new info and fresh dates to older articles.", Medium),
            item("c-5", "Readability", "Short paragraphs, bullet points, clear font.", Medium),
            item("c-6", "E-E-A-T Standards", "Demonstrate Experience, Expertise, Authoritativeness, Trust.", Medium),
        ]),
        category("offpage", "5. Off-Page & Local SEO", vec![
            item("off-1", "Google My Business", "Create, verify, and fully update business profile.", High),
            item("off-2", "NAP Consistency", "Name, Address, Phone must match across the web.", High),
            item("off-3", "Backlink Audit", "Identify and Disavow toxic links.", Medium),
            item("off-4", "Quality Link Building", "Acquire links from relevant, high-authority sites.", High),
            item("off-5", "Social Signals", "Link website to active social media profiles.", Low),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_ids_unique_across_whole_checklist() {
        for lang in [Language::Ar, Language::En] {
            let mut seen = HashSet::new();
            for cat in default_checklist(lang) {
                for it in &cat.items {
                    assert!(seen.insert(it.id.clone()), "duplicate id {}", it.id);
                }
            }
        }
    }

    #[test]
    fn catalogs_are_parallel() {
        let ar = default_checklist(Language::Ar);
        let en = default_checklist(Language::En);
        assert_eq!(ar.len(), en.len());
        for (a, e) in ar.iter().zip(&en) {
            assert_eq!(a.id, e.id);
            let a_ids: Vec<_> = a.items.iter().map(|i| &i.id).collect();
            let e_ids: Vec<_> = e.items.iter().map(|i| &i.id).collect();
            assert_eq!(a_ids, e_ids);
        }
    }

    #[test]
    fn all_items_start_incomplete() {
        for cat in default_checklist(Language::En) {
            assert!(cat.items.iter().all(|i| !i.is_completed));
        }
    }
}
