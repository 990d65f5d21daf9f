//! English and Arabic string tables.

use dioxus::prelude::*;
use study_core::model::Language;

/// Every user-visible string, keyed independently of language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    AppName,
    ToggleLanguage,
    Logout,
    Loading,
    Retry,
    Close,

    Login,
    Register,
    Email,
    Password,
    ConfirmPassword,
    FullName,
    WelcomeBack,
    CreateAccount,
    NoAccount,
    RegisterNow,
    HasAccount,
    LoginNow,
    PasswordMismatch,
    MissingFields,
    RegistrationSuccess,
    RegistrationFailed,
    LoginFailed,

    CoursesTitle,
    CoursesSubtitle,
    CreateNewCourse,
    CourseNamePlaceholder,
    CreateCourse,
    CourseTitleRequired,
    NoCourses,
    ViewCourse,
    BackToCourses,

    UploadTitle,
    UploadSubtitle,
    MyDocuments,
    NoDocuments,
    DragDrop,
    Or,
    BrowseFiles,
    UploadButton,
    Uploading,
    InvalidFileType,
    EmptyFile,
    UploadSuccess,
    UploadFailed,

    AnalyzeDocument,
    SummaryTab,
    ConceptsTab,
    TextTab,
    TranscriptTab,
    ToolsTab,
    NoSummaryYet,
    AnalyzeNow,
    NoConceptsYet,
    NoTranscript,
    BackToDocuments,
    GenerateQuiz,
    GenerateCards,
    QuizBlurb,
    CardsBlurb,
    Question,
    Submit,
    Score,
    FlipCard,
    Previous,
    Next,
    QuizCompleted,

    ConsentTitle,
    ConsentText,
    IAgree,
    Copyright,
    Privacy,
    Terms,

    ErrorGeneric,
    ErrorNetwork,
    ErrorPayload,
    ErrorValidation,
    ErrorSession,
}

impl Text {
    /// Look the string up in the given language.
    #[must_use]
    pub fn get(self, language: Language) -> &'static str {
        match language {
            Language::En => english(self),
            Language::Ar => arabic(self),
        }
    }
}

/// The language signal provided by the app shell.
#[must_use]
pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

fn english(text: Text) -> &'static str {
    match text {
        Text::AppName => "LearnSync AI",
        Text::ToggleLanguage => "عربي",
        Text::Logout => "Log Out",
        Text::Loading => "Loading...",
        Text::Retry => "Retry",
        Text::Close => "Close",

        Text::Login => "Log In",
        Text::Register => "Register",
        Text::Email => "Email Address",
        Text::Password => "Password",
        Text::ConfirmPassword => "Confirm Password",
        Text::FullName => "Full Name",
        Text::WelcomeBack => "Welcome Back",
        Text::CreateAccount => "Create Account",
        Text::NoAccount => "Don't have an account?",
        Text::RegisterNow => "Register now",
        Text::HasAccount => "Already have an account?",
        Text::LoginNow => "Log in",
        Text::PasswordMismatch => "Passwords do not match",
        Text::MissingFields => "Please fill in every field.",
        Text::RegistrationSuccess => "Registration successful! Please login.",
        Text::RegistrationFailed => "Registration failed. Please try again.",
        Text::LoginFailed => "Login failed. Please check your credentials.",

        Text::CoursesTitle => "My Courses",
        Text::CoursesSubtitle => "Organize your study materials by course.",
        Text::CreateNewCourse => "Create New Course",
        Text::CourseNamePlaceholder => "e.g. Data Mining Course",
        Text::CreateCourse => "Create Course",
        Text::CourseTitleRequired => "Course name cannot be empty.",
        Text::NoCourses => "No courses created yet.",
        Text::ViewCourse => "View Materials",
        Text::BackToCourses => "Back to Courses",

        Text::UploadTitle => "Upload Materials",
        Text::UploadSubtitle => {
            "Upload PDFs, audio, video or images to generate summaries and quizzes."
        }
        Text::MyDocuments => "My Documents",
        Text::NoDocuments => "No documents uploaded yet.",
        Text::DragDrop => "Drag and drop your file here",
        Text::Or => "OR",
        Text::BrowseFiles => "Browse Files",
        Text::UploadButton => "Upload File",
        Text::Uploading => "Uploading...",
        Text::InvalidFileType => "Please upload a PDF, audio, video or image file",
        Text::EmptyFile => "The selected file is empty.",
        Text::UploadSuccess => "File uploaded successfully!",
        Text::UploadFailed => "Error uploading file.",

        Text::AnalyzeDocument => "Analyze Document",
        Text::SummaryTab => "AI Summary",
        Text::ConceptsTab => "Key Concepts",
        Text::TextTab => "Extracted Text",
        Text::TranscriptTab => "Transcript",
        Text::ToolsTab => "Study Tools",
        Text::NoSummaryYet => "No summary generated yet.",
        Text::AnalyzeNow => "Generate Summary",
        Text::NoConceptsYet => "No concepts extracted.",
        Text::NoTranscript => "No transcript available.",
        Text::BackToDocuments => "Back to Documents",
        Text::GenerateQuiz => "Generate Quiz",
        Text::GenerateCards => "Generate Flashcards",
        Text::QuizBlurb => "Personalized multiple-choice questions based on this document.",
        Text::CardsBlurb => "Flashcards for the key terms and definitions.",
        Text::Question => "Question",
        Text::Submit => "Submit",
        Text::Score => "Your Score",
        Text::FlipCard => "Flip Card",
        Text::Previous => "Previous",
        Text::Next => "Next",
        Text::QuizCompleted => "Quiz Completed!",

        Text::ConsentTitle => "Terms of Service",
        Text::ConsentText => {
            "By using LearnSync AI, you agree to our Terms of Service and Privacy Policy. \
             We process your uploaded documents to provide educational insights."
        }
        Text::IAgree => "I Agree",
        Text::Copyright => "© 2026 LearnSync AI. All rights reserved.",
        Text::Privacy => "Privacy Policy",
        Text::Terms => "Terms of Service",

        Text::ErrorGeneric => "Something went wrong. Please try again.",
        Text::ErrorNetwork => "Could not reach the server. Please try again.",
        Text::ErrorPayload => "The server sent something we could not use.",
        Text::ErrorValidation => "Please check your input and try again.",
        Text::ErrorSession => "Your session has ended. Please log in again.",
    }
}

fn arabic(text: Text) -> &'static str {
    match text {
        Text::AppName => "LearnSync AI",
        Text::ToggleLanguage => "English",
        Text::Logout => "تسجيل الخروج",
        Text::Loading => "جارٍ التحميل...",
        Text::Retry => "إعادة المحاولة",
        Text::Close => "إغلاق",

        Text::Login => "تسجيل الدخول",
        Text::Register => "إنشاء حساب",
        Text::Email => "البريد الإلكتروني",
        Text::Password => "كلمة المرور",
        Text::ConfirmPassword => "تأكيد كلمة المرور",
        Text::FullName => "الاسم الكامل",
        Text::WelcomeBack => "مرحباً بعودتك",
        Text::CreateAccount => "إنشاء حساب جديد",
        Text::NoAccount => "ليس لديك حساب؟",
        Text::RegisterNow => "سجل الآن",
        Text::HasAccount => "لديك حساب بالفعل؟",
        Text::LoginNow => "سجل دخولك",
        Text::PasswordMismatch => "كلمتا المرور غير متطابقتين",
        Text::MissingFields => "يرجى تعبئة جميع الحقول.",
        Text::RegistrationSuccess => "تم التسجيل بنجاح! يرجى تسجيل الدخول.",
        Text::RegistrationFailed => "فشل التسجيل. يرجى المحاولة مرة أخرى.",
        Text::LoginFailed => "فشل تسجيل الدخول. يرجى التحقق من بياناتك.",

        Text::CoursesTitle => "مقرراتي",
        Text::CoursesSubtitle => "نظّم موادك الدراسية حسب المقرر.",
        Text::CreateNewCourse => "إنشاء مقرر جديد",
        Text::CourseNamePlaceholder => "مثال: مقرر تنقيب البيانات",
        Text::CreateCourse => "إنشاء المقرر",
        Text::CourseTitleRequired => "لا يمكن أن يكون اسم المقرر فارغاً.",
        Text::NoCourses => "لم يتم إنشاء أي مقررات بعد.",
        Text::ViewCourse => "عرض المواد",
        Text::BackToCourses => "عودة للمقررات",

        Text::UploadTitle => "رفع المواد الدراسية",
        Text::UploadSubtitle => "قم برفع ملفات PDF أو الصوت أو الفيديو أو الصور لإنشاء الملخصات والاختبارات.",
        Text::MyDocuments => "مستنداتي",
        Text::NoDocuments => "لم يتم رفع أي مستندات بعد.",
        Text::DragDrop => "اسحب وأفلت الملف هنا",
        Text::Or => "أو",
        Text::BrowseFiles => "استعراض الملفات",
        Text::UploadButton => "رفع الملف",
        Text::Uploading => "جارٍ الرفع...",
        Text::InvalidFileType => "يرجى رفع ملف PDF أو صوت أو فيديو أو صورة",
        Text::EmptyFile => "الملف المحدد فارغ.",
        Text::UploadSuccess => "تم رفع الملف بنجاح!",
        Text::UploadFailed => "حدث خطأ أثناء رفع الملف.",

        Text::AnalyzeDocument => "تحليل المستند",
        Text::SummaryTab => "الملخص الذكي",
        Text::ConceptsTab => "المفاهيم الأساسية",
        Text::TextTab => "النص الأصلي",
        Text::TranscriptTab => "النص المفرغ",
        Text::ToolsTab => "أدوات الدراسة",
        Text::NoSummaryYet => "لم يتم إنشاء ملخص بعد.",
        Text::AnalyzeNow => "إنشاء ملخص",
        Text::NoConceptsYet => "لم يتم استخراج مفاهيم بعد.",
        Text::NoTranscript => "لا يوجد نص مفرغ متاح.",
        Text::BackToDocuments => "عودة للمستندات",
        Text::GenerateQuiz => "إنشاء اختبار",
        Text::GenerateCards => "إنشاء بطاقات ذاكرة",
        Text::QuizBlurb => "أسئلة اختيار من متعدد مبنية على محتوى هذا المستند.",
        Text::CardsBlurb => "بطاقات ذاكرة للمصطلحات والتعريفات الأساسية.",
        Text::Question => "سؤال",
        Text::Submit => "إجابة",
        Text::Score => "نتيجتك",
        Text::FlipCard => "اقلب البطاقة",
        Text::Previous => "السابق",
        Text::Next => "التالي",
        Text::QuizCompleted => "أتممت الاختبار!",

        Text::ConsentTitle => "شروط الخدمة",
        Text::ConsentText => {
            "باستخدامك LearnSync AI فإنك توافق على شروط الخدمة وسياسة الخصوصية. \
             نقوم بمعالجة المستندات التي ترفعها لتقديم رؤى تعليمية."
        }
        Text::IAgree => "أوافق",
        Text::Copyright => "© 2026 LearnSync AI. جميع الحقوق محفوظة.",
        Text::Privacy => "سياسة الخصوصية",
        Text::Terms => "شروط الخدمة",

        Text::ErrorGeneric => "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
        Text::ErrorNetwork => "تعذر الوصول إلى الخادم. يرجى المحاولة مرة أخرى.",
        Text::ErrorPayload => "أرسل الخادم بيانات غير صالحة.",
        Text::ErrorValidation => "يرجى التحقق من المدخلات والمحاولة مرة أخرى.",
        Text::ErrorSession => "انتهت جلستك. يرجى تسجيل الدخول مرة أخرى.",
    }
}
